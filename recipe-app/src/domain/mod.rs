mod ingredients;
mod recipe;
mod session_state;

pub use ingredients::IngredientList;
pub use recipe::Recipe;
pub use session_state::{SessionAction, SessionState, View};
