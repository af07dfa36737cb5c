use crate::domain::model::{Component, VerticalLayout};

/// 將元件樹轉成 HTML 片段
pub fn render(component: &Component) -> String {
    let mut out = String::new();
    render_into(component, &mut out);
    out
}

fn render_into(component: &Component, out: &mut String) {
    match component {
        Component::H1(text) => {
            out.push_str("<h1>");
            out.push_str(&escape_html(text));
            out.push_str("</h1>");
        }
        Component::Paragraph(text) => {
            out.push_str("<p>");
            out.push_str(&escape_html(text));
            out.push_str("</p>");
        }
        Component::VerticalLayout(layout) => render_vertical_layout(layout, out),
    }
}

fn render_vertical_layout(layout: &VerticalLayout, out: &mut String) {
    out.push_str("<div class=\"vertical-layout\"");

    let theme = layout_theme(layout);
    if !theme.is_empty() {
        out.push_str(" theme=\"");
        out.push_str(&theme);
        out.push('"');
    }

    out.push_str(" style=\"");
    out.push_str(&layout_style(layout));
    out.push_str("\">");

    for child in &layout.children {
        render_into(child, out);
    }

    out.push_str("</div>");
}

fn layout_theme(layout: &VerticalLayout) -> String {
    let mut flags = Vec::new();
    if layout.spacing {
        flags.push("spacing");
    }
    if layout.padding {
        flags.push("padding");
    }
    flags.join(" ")
}

fn layout_style(layout: &VerticalLayout) -> String {
    let mut style = format!(
        "align-items: {}; justify-content: {};",
        layout.align_items.css_value(),
        layout.justify_content.css_value()
    );
    if layout.size_full {
        style.push_str(" width: 100%; height: 100%;");
    }
    style
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Alignment, JustifyContentMode};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_text_components() {
        assert_eq!(render(&Component::H1("Title".into())), "<h1>Title</h1>");
        assert_eq!(
            render(&Component::Paragraph("a < b".into())),
            "<p>a &lt; b</p>"
        );
    }

    #[test]
    fn test_render_centered_full_size_layout() {
        let layout = VerticalLayout::new()
            .align_items(Alignment::Center)
            .justify_content(JustifyContentMode::Center)
            .size_full()
            .add(Component::H1("x".into()));

        let html = render(&layout.into());
        assert!(html.starts_with("<div class=\"vertical-layout\" theme=\"spacing padding\""));
        assert!(html.contains("align-items: center;"));
        assert!(html.contains("justify-content: center;"));
        assert!(html.contains("width: 100%; height: 100%;"));
        assert!(html.ends_with("<h1>x</h1></div>"));
    }

    #[test]
    fn test_layout_without_spacing_or_padding_has_no_theme() {
        let layout = VerticalLayout::new().spacing(false).padding(false);
        let html = render(&layout.into());
        assert!(!html.contains("theme="));
        assert!(!html.contains("width: 100%"));
    }
}
