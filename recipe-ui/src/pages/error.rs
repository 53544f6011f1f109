use crate::components::ErrorDisplay;
use crate::{render_document, render_view};
use leptos::prelude::*;
use recipe_errors::AppError;

pub fn render_error_page(error: &AppError) -> String {
    let message = error.user_message().to_string();
    let retryable = error.is_retryable();
    let body = render_view(move || view! { <ErrorDisplay message=message retryable=retryable/> });
    render_document("Error - Smart Recipe Generator", &body)
}
