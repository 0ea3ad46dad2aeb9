//! Webview-backed browser effects.

use dioxus::prelude::*;
use folio_core::Browser;

/// Performs [`Browser`] requests by evaluating JavaScript in the webview.
///
/// Must be called from inside the Dioxus runtime (event handlers).
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalBrowser;

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn open_script(url: &str) -> String {
    format!("window.open({}, '_blank');", js_string(url))
}

fn scroll_script(element_id: &str) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        js_string(element_id)
    )
}

impl Browser for EvalBrowser {
    fn open_in_new_tab(&self, url: &str) {
        tracing::debug!(url, "Opening link");
        let _ = document::eval(&open_script(url));
    }

    fn scroll_into_view(&self, element_id: &str) {
        tracing::debug!(element_id, "Scrolling to section");
        let _ = document::eval(&scroll_script(element_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_script_quotes_url() {
        assert_eq!(
            open_script("https://a.dev/?q=\"x\""),
            r#"window.open("https://a.dev/?q=\"x\"", '_blank');"#
        );
        assert_eq!(open_script(""), r#"window.open("", '_blank');"#);
    }

    #[test]
    fn scroll_script_targets_id_and_tolerates_missing() {
        let js = scroll_script("section-about");
        assert!(js.starts_with(r#"document.getElementById("section-about")?."#));
        assert!(js.contains("behavior: 'smooth'"));
    }
}
