/// Fills the recipe instruction with the user's ingredients, untouched.
pub(super) fn build_recipe_prompt(ingredients: &str) -> String {
    format!(
        "You are a helpful recipe assistant.\n\
         Generate a step-by-step cooking recipe using the following ingredients: {ingredients}.\n\
         Include dish name, ingredients, and instructions.\n\
         Be creative if few items are provided.",
        ingredients = ingredients
    )
}
