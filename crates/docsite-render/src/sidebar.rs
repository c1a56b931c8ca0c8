//! Sidebar rendering.
//!
//! Recurses uniformly over [`NavEntry`] trees: a doc entry becomes a
//! link to its content route, a category becomes a non-clickable header
//! followed by a nested list of its children in listed order.
//!
//! Empty categories are suppressed — a header with no visible content
//! helps nobody — with a warning so the author can fix the manifest.

use std::fmt::Write;

use docsite_sidebars::NavEntry;

use crate::escape::escape_html;

/// Route prefix for doc slugs; route resolution beyond this prefix is
/// the consuming framework's job.
const DOC_ROUTE_PREFIX: &str = "/docs/";

/// Render a sidebar tree as a nested list.
///
/// Entries render in author order. Doc links are labeled with their
/// slug; title resolution belongs to the framework that owns the
/// content pages.
#[must_use]
pub fn render_sidebar(entries: &[NavEntry]) -> String {
    let mut out = String::new();
    out.push_str(r#"<ul class="sidebar">"#);
    render_entries(entries, &mut out);
    out.push_str("</ul>");
    out
}

fn render_entries(entries: &[NavEntry], out: &mut String) {
    for entry in entries {
        match entry {
            NavEntry::Doc(slug) => {
                let escaped = escape_html(slug);
                write!(
                    out,
                    r#"<li class="sidebar-doc"><a href="{DOC_ROUTE_PREFIX}{escaped}">{escaped}</a></li>"#
                )
                .unwrap();
            }
            NavEntry::Category(category) => {
                if category.items.is_empty() {
                    tracing::warn!(label = %category.label, "Suppressing empty sidebar category");
                    continue;
                }
                write!(
                    out,
                    r#"<li class="sidebar-category"><div class="sidebar-category-label">{}</div><ul>"#,
                    escape_html(&category.label)
                )
                .unwrap();
                render_entries(&category.items, out);
                out.push_str("</ul></li>");
            }
        }
    }
}
