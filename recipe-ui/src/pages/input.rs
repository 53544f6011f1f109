use crate::components::{HistoryList, IngredientForm};
use crate::{render_document, render_view};
use leptos::prelude::*;
use recipe_app::domain::Recipe;

#[component]
fn InputPage(warning: Option<String>, history: Vec<Recipe>) -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Smart Recipe Generator"</h1>
            <p class="hero__subtitle">"Turn your ingredients into delicious meals"</p>
        </div>
        <IngredientForm warning=warning/>
        <section class="history">
            <h2 class="history__title">"Your recipes"</h2>
            <HistoryList entries=history/>
        </section>
    }
}

/// The ingredient form, an optional inline warning, and the session history
/// (newest first).
pub fn render_input_page(warning: Option<&str>, history: Vec<Recipe>) -> String {
    let warning = warning.map(str::to_string);
    let body = render_view(move || view! { <InputPage warning=warning history=history/> });
    render_document("Smart Recipe Generator", &body)
}
