use pulldown_cmark::{html, Event, Options, Parser};

/// Renders model output as HTML. Raw HTML in the text is shown as text, never
/// passed through.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = markdown_to_html("## Tomato Pasta\n\n- tomato\n- pasta\n\n1. Boil\n2. Serve");
        assert!(html.contains("<h2>Tomato Pasta</h2>"));
        assert!(html.contains("<ul>\n<li>tomato</li>"));
        assert!(html.contains("<ol>\n<li>Boil</li>"));
    }

    #[test]
    fn test_emphasis() {
        let html = markdown_to_html("**Dish name:** *Quick* soup");
        assert!(html.contains("<strong>Dish name:</strong>"));
        assert!(html.contains("<em>Quick</em>"));
    }

    #[test]
    fn test_escapes_raw_html() {
        let html = markdown_to_html("Enjoy <script>alert(1)</script> your meal");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escapes_html_blocks() {
        let html = markdown_to_html("<div onclick=\"x()\">\nhi\n</div>");
        assert!(!html.contains("<div"));
    }
}
