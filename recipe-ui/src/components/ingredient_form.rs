use leptos::prelude::*;

/// The ingredient text area. Posts to `/generate`.
#[component]
pub fn IngredientForm(warning: Option<String>) -> impl IntoView {
    view! {
        <form action="/generate" method="post" class="ingredient-form">
            <textarea
                name="ingredients"
                class="ingredient-form__input"
                placeholder="Enter ingredients (e.g., tomato, onion, pasta)"
                rows="3"
            ></textarea>
            {warning.map(|message| view! {
                <p class="ingredient-form__warning" role="alert">{message}</p>
            })}
            <button type="submit" class="ingredient-form__button">
                "Generate Recipe"
            </button>
        </form>
    }
}
