//! Navbar and footer rendering.
//!
//! Both fragments are straight transcriptions of the resolved theme:
//! an input list of N entries renders exactly N elements, in input
//! order. Labeled items become links; unlabeled widget items become
//! typed placeholder elements the frontend hydrates.

use std::fmt::Write;

use docsite_config::{Footer, Navbar, NavbarItem, NavbarPosition};

use crate::escape::escape_html;

/// Render the navbar: logo (when present) plus every item in input
/// order.
#[must_use]
pub fn render_navbar(navbar: &Navbar) -> String {
    let mut out = String::new();
    out.push_str(r#"<nav class="navbar">"#);

    if let Some(logo) = &navbar.logo {
        let href = logo.href.as_deref().unwrap_or("/");
        write!(
            out,
            r#"<a class="navbar-logo" href="{}"><img src="{}" alt="{}"></a>"#,
            escape_html(href),
            escape_html(&logo.src),
            escape_html(&logo.alt)
        )
        .unwrap();
    }

    out.push_str(r#"<ul class="navbar-items">"#);
    for item in &navbar.items {
        render_navbar_item(item, &mut out);
    }
    out.push_str("</ul></nav>");
    out
}

fn render_navbar_item(item: &NavbarItem, out: &mut String) {
    let side = match item.position {
        NavbarPosition::Left => "left",
        NavbarPosition::Right => "right",
    };
    let mut class = format!("navbar-item navbar-item-{side}");
    if let Some(extra) = &item.class_name {
        write!(class, " {}", escape_html(extra)).unwrap();
    }
    write!(out, r#"<li class="{class}">"#).unwrap();

    // Widget items have a type and no label; everything else is a link.
    if let Some(widget) = &item.item_type {
        write!(
            out,
            r#"<span class="navbar-widget" data-widget="{}"></span>"#,
            escape_html(widget)
        )
        .unwrap();
    } else {
        let label = item.label.as_deref().unwrap_or_default();
        write!(
            out,
            r#"<a href="{}">{}</a>"#,
            escape_html(&item_href(item)),
            escape_html(label)
        )
        .unwrap();
    }

    out.push_str("</li>");
}

/// Resolved link target: external `href` verbatim, internal `to` routes
/// rooted at `/`.
fn item_href(item: &NavbarItem) -> String {
    resolve_href(item.href.as_deref(), item.to.as_deref())
}

fn resolve_href(href: Option<&str>, to: Option<&str>) -> String {
    if let Some(href) = href {
        return href.to_owned();
    }
    match to {
        Some(to) => format!("/{}", to.trim_start_matches('/')),
        None => "#".to_owned(),
    }
}

/// Render the footer: link columns in input order, then the copyright
/// line. An empty `links` list renders as absent, not as an error.
#[must_use]
pub fn render_footer(footer: &Footer) -> String {
    let mut out = String::new();
    write!(
        out,
        r#"<footer class="footer footer-{}">"#,
        escape_html(&footer.style)
    )
    .unwrap();

    if !footer.links.is_empty() {
        out.push_str(r#"<div class="footer-links">"#);
        for column in &footer.links {
            write!(
                out,
                r#"<div class="footer-column"><div class="footer-column-title">{}</div><ul>"#,
                escape_html(&column.title)
            )
            .unwrap();
            for link in &column.items {
                write!(
                    out,
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_html(&resolve_href(link.href.as_deref(), link.to.as_deref())),
                    escape_html(&link.label)
                )
                .unwrap();
            }
            out.push_str("</ul></div>");
        }
        out.push_str("</div>");
    }

    if !footer.copyright.is_empty() {
        write!(
            out,
            r#"<div class="footer-copyright">{}</div>"#,
            escape_html(&footer.copyright)
        )
        .unwrap();
    }

    out.push_str("</footer>");
    out
}

#[cfg(test)]
mod tests {
    use docsite_config::{FooterColumn, FooterLink, Logo};
    use pretty_assertions::assert_eq;

    use super::*;

    fn link_item(label: &str, to: &str) -> NavbarItem {
        NavbarItem {
            to: Some(to.to_owned()),
            label: Some(label.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_navbar_renders_all_items_in_order() {
        let navbar = Navbar {
            logo: None,
            items: vec![
                link_item("Docs", "docs/"),
                link_item("API", "api/"),
                NavbarItem {
                    item_type: Some("docsVersionDropdown".to_owned()),
                    position: NavbarPosition::Right,
                    ..Default::default()
                },
                NavbarItem {
                    href: Some("https://github.com/example/sdk".to_owned()),
                    label: Some("GitHub".to_owned()),
                    position: NavbarPosition::Right,
                    ..Default::default()
                },
                link_item("Changelog", "changelog"),
            ],
        };

        let html = render_navbar(&navbar);

        // Exactly five entries
        assert_eq!(html.matches("<li").count(), 5);
        // Input order preserved
        let docs = html.find(">Docs<").unwrap();
        let api = html.find(">API<").unwrap();
        let widget = html.find("docsVersionDropdown").unwrap();
        let github = html.find(">GitHub<").unwrap();
        let changelog = html.find(">Changelog<").unwrap();
        assert!(docs < api && api < widget && widget < github && github < changelog);
    }

    #[test]
    fn test_navbar_item_routes_and_urls() {
        let navbar = Navbar {
            logo: None,
            items: vec![
                link_item("Docs", "docs/"),
                NavbarItem {
                    href: Some("https://github.com/example/sdk".to_owned()),
                    label: Some("GitHub".to_owned()),
                    ..Default::default()
                },
            ],
        };

        let html = render_navbar(&navbar);

        assert!(html.contains(r#"<a href="/docs/">Docs</a>"#));
        assert!(html.contains(r#"<a href="https://github.com/example/sdk">GitHub</a>"#));
    }

    #[test]
    fn test_navbar_widget_renders_placeholder() {
        let navbar = Navbar {
            logo: None,
            items: vec![NavbarItem {
                item_type: Some("docsVersionDropdown".to_owned()),
                position: NavbarPosition::Right,
                ..Default::default()
            }],
        };

        let html = render_navbar(&navbar);

        assert!(html.contains(r#"<span class="navbar-widget" data-widget="docsVersionDropdown">"#));
        assert!(html.contains("navbar-item-right"));
    }

    #[test]
    fn test_navbar_logo() {
        let navbar = Navbar {
            logo: Some(Logo {
                alt: "SDK logo".to_owned(),
                src: "img/logo.svg".to_owned(),
                ..Default::default()
            }),
            items: Vec::new(),
        };

        let html = render_navbar(&navbar);

        assert!(html.contains(r#"<a class="navbar-logo" href="/">"#));
        assert!(html.contains(r#"<img src="img/logo.svg" alt="SDK logo">"#));
    }

    #[test]
    fn test_navbar_item_class_name_hint() {
        let navbar = Navbar {
            logo: None,
            items: vec![NavbarItem {
                class_name: Some("navbar-cta".to_owned()),
                ..link_item("Get Started", "docs/")
            }],
        };

        let html = render_navbar(&navbar);

        assert!(html.contains(r#"class="navbar-item navbar-item-left navbar-cta""#));
    }

    #[test]
    fn test_footer_with_links_and_copyright() {
        let footer = Footer {
            style: "dark".to_owned(),
            links: vec![FooterColumn {
                title: "Docs".to_owned(),
                items: vec![FooterLink {
                    label: "Overview".to_owned(),
                    to: Some("docs/".to_owned()),
                    href: None,
                }],
            }],
            copyright: "Copyright Example Org".to_owned(),
        };

        let html = render_footer(&footer);

        assert!(html.contains(r#"<footer class="footer footer-dark">"#));
        assert!(html.contains(r#"<div class="footer-column-title">Docs</div>"#));
        assert!(html.contains(r#"<li><a href="/docs/">Overview</a></li>"#));
        assert!(html.contains(r#"<div class="footer-copyright">Copyright Example Org</div>"#));
    }

    #[test]
    fn test_footer_empty_links_renders_copyright_only() {
        let footer = Footer {
            style: "light".to_owned(),
            links: Vec::new(),
            copyright: "Copyright Example Org".to_owned(),
        };

        let html = render_footer(&footer);

        assert_eq!(
            html,
            concat!(
                r#"<footer class="footer footer-light">"#,
                r#"<div class="footer-copyright">Copyright Example Org</div>"#,
                "</footer>",
            )
        );
        assert!(!html.contains("footer-links"));
    }

    #[test]
    fn test_footer_escapes_text() {
        let footer = Footer {
            style: "light".to_owned(),
            links: Vec::new(),
            copyright: "Example <Org> & Co".to_owned(),
        };

        let html = render_footer(&footer);

        assert!(html.contains("Example &lt;Org&gt; &amp; Co"));
    }
}
