mod export_recipe_pdf;
mod generate_recipe;

pub use export_recipe_pdf::ExportRecipePdf;
pub use generate_recipe::GenerateRecipe;
