use crate::components::RecipeDisplay;
use crate::{render_document, render_view};
use leptos::prelude::*;
use recipe_app::domain::Recipe;

pub fn render_recipe_page(recipe: &Recipe) -> String {
    let recipe = recipe.clone();
    let body = render_view(move || {
        view! {
            <div class="hero">
                <h1 class="hero__title">"Your Generated Recipe"</h1>
            </div>
            <RecipeDisplay recipe=recipe/>
        }
    });
    render_document("Your Generated Recipe", &body)
}
