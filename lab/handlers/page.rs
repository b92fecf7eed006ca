use std::io::Cursor;
use tiny_http::{Request, Response};

use neuromat::{display_rounded, MatrixField};

use crate::render::render_page;
use crate::state::{LabState, UpdateForm};
use crate::util::form::{form_get, parse_form};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: &LabState) -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(build_page(state))
}

// ---------------------------------------------------------------------------
// POST /update
// ---------------------------------------------------------------------------

pub fn handle_update(request: &mut Request, state: &mut LabState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let pairs = parse_form(&body);

    let form = UpdateForm {
        size: form_get(&pairs, "size").and_then(|s| s.trim().parse().ok()),
        // Unchecked checkboxes are simply absent from the form body.
        auto_fill: form_get(&pairs, "auto").is_some(),
        vector_text: textarea_value(&pairs, "vector"),
        w_text: textarea_value(&pairs, "w"),
        v_text: textarea_value(&pairs, "v"),
    };

    state.apply_update(&form);
    crate::routes::redirect("/")
}

/// Textarea values arrive with CRLF line endings; normalize so they compare
/// against the stored LF texts.
fn textarea_value(pairs: &[(String, String)], key: &str) -> String {
    form_get(pairs, key).unwrap_or("").replace("\r\n", "\n")
}

// ---------------------------------------------------------------------------
// Page builder
// ---------------------------------------------------------------------------

fn build_page(state: &LabState) -> String {
    let ws = &state.workspace;
    let auto = ws.auto_fill;

    render_page(|tmpl| {
        tmpl.replace("{{SIZE}}", &ws.size.to_string())
            .replace("{{AUTO_CHECKED}}", if auto { "checked" } else { "" })
            .replace("{{VECTOR_FIELD}}", &field_textarea("vector", &state.vector_field, false))
            .replace("{{W_FIELD}}", &field_textarea("w", &state.w_field, auto))
            .replace("{{V_FIELD}}", &field_textarea("v", &state.v_field, auto))
            .replace("{{NET1}}", &result_column(&ws.net1))
            .replace("{{OUT1}}", &result_column(&ws.out1))
            .replace("{{NET2}}", &result_column(&ws.net2))
            .replace("{{OUT2}}", &result_column(&ws.out2))
    })
}

fn field_textarea(name: &str, field: &MatrixField, readonly: bool) -> String {
    format!(
        r#"<textarea name="{name}" rows="{rows}" cols="{cols}" class="matrix{invalid}"{ro}>{text}</textarea>"#,
        name = name,
        rows = field.rows,
        cols = field.display_cols(),
        invalid = if field.flagged() { " invalid" } else { "" },
        ro = if readonly { " readonly" } else { "" },
        text = html_escape(&field.text),
    )
}

fn result_column(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format!("<div>{}</div>", display_rounded(v)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_page_renders_defaults() {
        let state = LabState::new();
        let page = build_page(&state);

        assert!(page.contains(r#"value="5""#));
        assert!(page.contains("checked"));
        assert!(page.contains("0.2 0.2 0.2 0.2 0.2"));
        assert!(page.contains(" readonly"));
        // No tokens left behind.
        assert!(!page.contains("{{"));
    }

    #[test]
    fn flagged_field_carries_invalid_class() {
        let mut state = LabState::new();
        let _ = state.vector_field.commit("not a vector");
        let page = build_page(&state);
        assert!(page.contains(r#"class="matrix invalid""#));
    }

    #[test]
    fn result_column_rounds_to_three_decimals() {
        assert_eq!(
            result_column(&[0.5, 0.3333333]),
            "<div>0.5</div>\n<div>0.333</div>"
        );
        assert_eq!(result_column(&[]), "");
    }

    #[test]
    fn escapes_html_in_raw_field_text() {
        let mut state = LabState::new();
        let _ = state.vector_field.commit("<script>");
        let page = build_page(&state);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
    }
}
