//! Deterministic HTML rendering for the element tree.

use super::{Element, LabelContent};

/// Void elements have no closing tag and never render children.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escape text for safe inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn render_element(element: &Element, out: &mut String) {
    let data = element.inner.borrow();

    out.push('<');
    out.push_str(&data.tag);
    for (name, value) in &data.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    if !data.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_html(&data.classes.join(" ")));
        out.push('"');
    }
    if let Some(style) = &data.style {
        out.push_str(" style=\"");
        out.push_str(&escape_html(style));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&data.tag.as_str()) {
        return;
    }

    match &data.label {
        LabelContent::None => {}
        LabelContent::Plain(text) => out.push_str(&escape_html(text)),
        LabelContent::Rich(markup) => out.push_str(markup),
    }

    for child in &data.children {
        render_element(child, out);
    }

    out.push_str("</");
    out.push_str(&data.tag);
    out.push('>');
}
