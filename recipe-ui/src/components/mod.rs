mod error_display;
mod history_list;
mod ingredient_form;
mod recipe_display;

pub use error_display::ErrorDisplay;
pub use history_list::HistoryList;
pub use ingredient_form::IngredientForm;
pub use recipe_display::RecipeDisplay;
