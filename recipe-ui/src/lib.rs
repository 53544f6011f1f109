pub mod components;
pub mod markdown;
pub mod pages;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

pub use pages::{render_error_page, render_input_page, render_recipe_page};

/// Server-renders a view to an HTML fragment under a fresh reactive owner.
pub(crate) fn render_view<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

pub(crate) fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🍳</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
{body}
    </main>
    <footer class="footer">Powered by your pantry</footer>
</body>
</html>"#,
        title = title,
        body = body,
        CSS = CSS
    )
}

const CSS: &str = r#"
:root {
    --base: #fff8f0;
    --surface: #ffffff;
    --overlay: #f3e4d7;
    --muted: #a08f83;
    --text: #3b2f2a;
    --accent: #ff7043;
    --accent-dark: #d84315;
    --sage: #5b7f5a;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(1.75rem, 5vw, 2.5rem); color: var(--accent-dark); font-weight: 800; margin-bottom: 0.5rem; }
.hero__subtitle { color: var(--muted); font-size: 1.05rem; }
.ingredient-form { display: flex; flex-direction: column; align-items: center; gap: 0.75rem; margin: 1.5rem auto; max-width: 420px; }
.ingredient-form__input {
    width: 100%; padding: 0.75rem 1rem; border: 2px solid var(--overlay);
    border-radius: 8px; background: var(--surface); color: var(--text); font-size: 0.95rem; resize: vertical;
}
.ingredient-form__input:focus { outline: none; border-color: var(--accent); }
.ingredient-form__warning { color: var(--accent-dark); font-weight: 600; }
.ingredient-form__button, .recipe__button {
    padding: 0.6rem 1.4rem; background: var(--accent); color: #fff; border: none;
    border-radius: 8px; font-size: 0.95rem; font-weight: 700; cursor: pointer; text-decoration: none; display: inline-block;
}
.recipe__button--secondary { background: var(--sage); }
.recipe {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem 2rem; margin: 1.5rem 0;
}
.recipe__ingredients { color: var(--muted); font-style: italic; margin-bottom: 1rem; }
.recipe__content { line-height: 1.7; }
.recipe__content h1, .recipe__content h2, .recipe__content h3 { color: var(--accent-dark); margin: 1rem 0 0.5rem; }
.recipe__content p { margin-bottom: 0.75rem; }
.recipe__content ul, .recipe__content ol { margin: 0 0 0.75rem 1.5rem; }
.recipe__actions { display: flex; gap: 1rem; align-items: center; margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.history { margin-top: 2.5rem; }
.history__title { font-size: 1.2rem; margin-bottom: 0.75rem; }
.history__empty { color: var(--muted); }
.history__list { list-style: none; }
.history__item { background: var(--surface); border: 1px solid var(--overlay); border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 0.5rem; }
.history__item summary { cursor: pointer; }
.history__time { color: var(--muted); font-variant-numeric: tabular-nums; }
.history__content { margin-top: 0.75rem; line-height: 1.6; }
.error { background: #fdecea; border: 2px solid var(--accent-dark); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--accent-dark); font-weight: 700; margin-bottom: 0.5rem; }
.error__hint { color: var(--muted); margin-top: 0.5rem; }
.error__retry { display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background: var(--accent-dark); color: #fff; border-radius: 4px; text-decoration: none; }
.footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.85rem; }
"#;
