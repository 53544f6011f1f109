use crate::markdown::markdown_to_html;
use leptos::prelude::*;
use recipe_app::domain::Recipe;

/// Past recipes of this session. Expects them newest first.
#[component]
pub fn HistoryList(entries: Vec<Recipe>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="history__empty">"No recipes yet this session."</p> }.into_any();
    }

    view! {
        <ul class="history__list">
            {entries.into_iter().map(|entry| {
                let html_content = markdown_to_html(&entry.text);
                view! {
                    <li class="history__item">
                        <details>
                            <summary>
                                <span class="history__time">
                                    {entry.created_at.format("%H:%M").to_string()}
                                </span>
                                " "
                                <span class="history__ingredients">{entry.ingredients}</span>
                            </summary>
                            <div class="history__content" inner_html=html_content></div>
                        </details>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
