/// Central template renderer for the LeafMedic studio.
///
/// The studio uses a single HTML template (`studio/assets/studio.html`) with
/// placeholder tokens like `{{TOKEN}}`. The template is embedded at compile
/// time; `render_page` fills the global tokens and hands the rest to a
/// closure. Tokens the closure leaves behind are blanked so raw `{{TOKEN}}`
/// strings never reach the browser.

use crate::state::{FlashKind, FlashMessage};

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Renders the full studio page.
///
/// # Arguments
/// - `flash`       : optional banner above the upload form
/// - `class_count` : number of classes the loaded model knows
/// - `top_k`       : value pre-filled in the top-K field
/// - `fill`        : closure that fills page-specific placeholders
pub fn render_page<F>(flash: Option<FlashMessage>, class_count: usize, top_k: usize, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{FLASH}}",       &flash_html(flash));
    html = html.replace("{{CLASS_COUNT}}", &class_count.to_string());
    html = html.replace("{{TOP_K}}",       &top_k.to_string());

    html = fill(html);

    blank_remaining(html)
}

fn flash_html(flash: Option<FlashMessage>) -> String {
    match flash {
        None => String::new(),
        Some(msg) => {
            let class = match msg.kind {
                FlashKind::Info  => "flash flash-info",
                FlashKind::Error => "flash flash-error",
            };
            format!(r#"<div class="{}">{}</div>"#, class, html_escape(&msg.text))
        }
    }
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}
