//! Legend markup for the map's legend control.

use super::builder::{LegendEntry, RANGE_SEPARATOR};

/// Render a legend as the HTML fragment the legend control displays
///
/// **Public** - `<span>title</span><ul><li>...</li></ul>`
pub fn legend_html(title: &str, entries: &[LegendEntry]) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li><span class="swatch" style="background:{}"></span> {}</li>"#,
                escape_html(&entry.color),
                escape_html(&entry.label)
            )
        })
        .collect();

    format!("<span>{}</span><ul>{}</ul>", escape_html(title), items)
}

/// Escape text for HTML, spelling the range dash as `&ndash;`
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            RANGE_SEPARATOR => out.push_str("&ndash;"),
            _ => out.push(c),
        }
    }
    out
}
