mod error;
mod input;
mod recipe;

pub use error::render_error_page;
pub use input::render_input_page;
pub use recipe::render_recipe_page;
