/// Template renderer for the neuromat lab.
///
/// The lab is a single HTML page (`lab/assets/lab.html`) with placeholder
/// tokens like `{{TOKEN}}`. The template is loaded at compile time;
/// `render_page` accepts a closure that substitutes the placeholders, and
/// any token the closure missed is blanked afterwards so raw `{{TOKEN}}`
/// strings never reach the browser.

const TEMPLATE: &str = include_str!("assets/lab.html");

pub fn render_page<F>(fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    blank_remaining(fill(TEMPLATE.to_owned()))
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with
/// an empty string.
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
