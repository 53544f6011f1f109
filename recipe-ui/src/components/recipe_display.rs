use crate::markdown::markdown_to_html;
use leptos::prelude::*;
use recipe_app::domain::Recipe;

#[component]
pub fn RecipeDisplay(recipe: Recipe) -> impl IntoView {
    let html_content = markdown_to_html(&recipe.text);

    view! {
        <div class="recipe">
            <p class="recipe__ingredients">"Made from: " {recipe.ingredients}</p>
            <div class="recipe__content" inner_html=html_content></div>
            <div class="recipe__actions">
                <a href="/recipe.pdf" class="recipe__button" download="recipe.pdf">
                    "Download PDF"
                </a>
                <form action="/reset" method="post" class="recipe__reset">
                    <button type="submit" class="recipe__button recipe__button--secondary">
                        "Generate Another Recipe"
                    </button>
                </form>
            </div>
        </div>
    }
}
