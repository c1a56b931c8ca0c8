//! Announcement banner.
//!
//! A zero-input, zero-state presentational unit: a highlighted block
//! with centered text, a line break, and one hyperlink with a literal
//! destination and label. It takes no configuration and cannot fail.

const BANNER_HTML: &str = concat!(
    r#"<div class="announcement-banner" style="background-color:#fff3cd;text-align:center;padding:0.5em;">"#,
    "This documentation describes a deprecated release of the SDK and is no longer updated.",
    "<br>",
    r#"<a href="https://docs.example.com/sdk/">See the current documentation</a>"#,
    "</div>"
);

/// Render the announcement banner.
///
/// The output is fixed: every invocation returns the same fragment.
#[must_use]
pub fn announcement_banner() -> &'static str {
    BANNER_HTML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_stable_across_invocations() {
        let first = announcement_banner();
        let second = announcement_banner();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_banner_contains_link_and_break() {
        let html = announcement_banner();
        assert!(html.contains("<br>"));
        assert!(html.contains(r#"<a href="https://docs.example.com/sdk/">"#));
        assert!(html.contains("text-align:center"));
    }
}
