use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(#[prop(into)] message: String, retryable: bool) -> impl IntoView {
    view! {
        <div class="error">
            <p class="error__title">"Something went wrong"</p>
            <p class="error__message">{message}</p>
            {retryable.then(|| view! {
                <p class="error__hint">"This usually passes. Give it another go."</p>
                <a href="/" class="error__retry">"Try again"</a>
            })}
        </div>
    }
}
