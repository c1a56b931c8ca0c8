//! Theme configuration model.
//!
//! Describes the UI chrome of the site: color mode, navbar, footer, and
//! opaque third-party credential blocks. A [`ThemeConfig`] is resolved
//! from a base record plus site-level [`ThemeOverrides`] with
//! [`resolve_theme`]; site-specific fields take precedence.

use serde::{Deserialize, Serialize};

/// Resolved theme configuration.
///
/// Every loaded site carries exactly one of these. Entry lists preserve
/// author-specified order; display order is semantically meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color mode defaults and switch policy.
    pub color_mode: ColorMode,
    /// Top navigation bar.
    pub navbar: Navbar,
    /// Page footer.
    pub footer: Footer,
    /// Google Analytics credentials (opaque to this crate).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<GoogleAnalytics>,
    /// Algolia hosted-search credentials (opaque to this crate).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<Algolia>,
}

/// Color mode options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMode {
    /// Mode used on first visit.
    pub default_mode: ColorModeDefault,
    /// Hide the light/dark toggle entirely.
    pub disable_switch: bool,
    /// Honor the OS-level `prefers-color-scheme` setting.
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            default_mode: ColorModeDefault::Light,
            disable_switch: false,
            respect_prefers_color_scheme: true,
        }
    }
}

/// Default color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModeDefault {
    #[default]
    Light,
    Dark,
}

/// Top navigation bar: an optional logo plus an ordered item list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Navbar {
    /// Site logo shown at the start of the navbar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Navbar entries in display order.
    pub items: Vec<NavbarItem>,
}

/// Navbar logo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    /// Alt text.
    pub alt: String,
    /// Image path.
    pub src: String,
    /// Dark-mode image path, if different.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    /// Link target when the logo is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One navbar entry.
///
/// An entry is either a labeled link (internal `to` route or external
/// `href` URL) or a type-driven widget (e.g. a version selector), which
/// carries an `item_type` and no label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItem {
    /// Internal route destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// External URL destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display label. Absent for widget items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Widget discriminator for type-driven items.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Which side of the navbar the item renders on.
    pub position: NavbarPosition,
    /// Optional styling hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl NavbarItem {
    /// Destination of this item: external `href` wins over the `to` route.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.href.as_deref().or(self.to.as_deref())
    }
}

/// Navbar item placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Page footer: a style, an ordered list of link columns, and a
/// copyright line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Footer style name (e.g. "light", "dark").
    pub style: String,
    /// Link columns in display order. Empty renders as absent.
    pub links: Vec<FooterColumn>,
    /// Copyright line.
    pub copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            style: "light".to_owned(),
            links: Vec::new(),
            copyright: String::new(),
        }
    }
}

/// One footer column: a title plus its links in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterColumn {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<FooterLink>,
}

/// One footer link (internal `to` route or external `href` URL).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    /// Display label.
    pub label: String,
    /// Internal route destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// External URL destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterLink {
    /// Destination of this link: external `href` wins over the `to` route.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.href.as_deref().or(self.to.as_deref())
    }
}

/// Google Analytics credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleAnalytics {
    /// Tracking ID.
    pub tracking_id: String,
    /// Anonymize visitor IP addresses.
    pub anonymize_ip: bool,
}

/// Algolia hosted-search credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Algolia {
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
    /// Application ID.
    pub app_id: String,
}

/// Site-level theme overrides as parsed from the config file.
///
/// All fields are optional; `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub color_mode: Option<ColorMode>,
    pub navbar: Option<Navbar>,
    pub footer: Option<Footer>,
    pub google_analytics: Option<GoogleAnalytics>,
    pub algolia: Option<Algolia>,
}

/// Resolve a theme from a base record plus site-level overrides.
///
/// Explicit field-by-field override: a field set in `overrides` replaces
/// the base field wholesale, an unset field keeps the base value. There
/// is no deep merging within a field.
#[must_use]
pub fn resolve_theme(base: &ThemeConfig, overrides: &ThemeOverrides) -> ThemeConfig {
    ThemeConfig {
        color_mode: overrides
            .color_mode
            .clone()
            .unwrap_or_else(|| base.color_mode.clone()),
        navbar: overrides
            .navbar
            .clone()
            .unwrap_or_else(|| base.navbar.clone()),
        footer: overrides
            .footer
            .clone()
            .unwrap_or_else(|| base.footer.clone()),
        // Credential blocks are overrides-only unless the base carries them
        google_analytics: overrides
            .google_analytics
            .clone()
            .or_else(|| base.google_analytics.clone()),
        algolia: overrides.algolia.clone().or_else(|| base.algolia.clone()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_color_mode_defaults() {
        let mode = ColorMode::default();
        assert_eq!(mode.default_mode, ColorModeDefault::Light);
        assert!(!mode.disable_switch);
        assert!(mode.respect_prefers_color_scheme);
    }

    #[test]
    fn test_navbar_item_destination_prefers_href() {
        let item = NavbarItem {
            to: Some("docs/".to_owned()),
            href: Some("https://example.com".to_owned()),
            ..Default::default()
        };
        assert_eq!(item.destination(), Some("https://example.com"));
    }

    #[test]
    fn test_navbar_item_destination_falls_back_to_route() {
        let item = NavbarItem {
            to: Some("docs/".to_owned()),
            ..Default::default()
        };
        assert_eq!(item.destination(), Some("docs/"));
    }

    #[test]
    fn test_navbar_item_widget_has_no_destination() {
        let item = NavbarItem {
            item_type: Some("docsVersionDropdown".to_owned()),
            position: NavbarPosition::Right,
            ..Default::default()
        };
        assert_eq!(item.destination(), None);
        assert_eq!(item.label, None);
    }

    #[test]
    fn test_resolve_theme_empty_overrides_keeps_base() {
        let base = ThemeConfig {
            footer: Footer {
                style: "dark".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = resolve_theme(&base, &ThemeOverrides::default());

        assert_eq!(resolved, base);
    }

    #[test]
    fn test_resolve_theme_override_wins() {
        let base = ThemeConfig::default();
        let overrides = ThemeOverrides {
            color_mode: Some(ColorMode {
                default_mode: ColorModeDefault::Dark,
                disable_switch: true,
                respect_prefers_color_scheme: false,
            }),
            ..Default::default()
        };

        let resolved = resolve_theme(&base, &overrides);

        assert_eq!(resolved.color_mode.default_mode, ColorModeDefault::Dark);
        assert!(resolved.color_mode.disable_switch);
        // Untouched fields keep the base value
        assert_eq!(resolved.footer, base.footer);
        assert_eq!(resolved.navbar, base.navbar);
    }

    #[test]
    fn test_resolve_theme_replaces_fields_wholesale() {
        let base = ThemeConfig {
            navbar: Navbar {
                items: vec![NavbarItem {
                    to: Some("docs/".to_owned()),
                    label: Some("Docs".to_owned()),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let overrides = ThemeOverrides {
            navbar: Some(Navbar::default()),
            ..Default::default()
        };

        let resolved = resolve_theme(&base, &overrides);

        // An overriding navbar replaces the base item list, not appends
        assert!(resolved.navbar.items.is_empty());
    }

    #[test]
    fn test_resolve_theme_credentials_fall_through() {
        let base = ThemeConfig {
            algolia: Some(Algolia {
                api_key: "key".to_owned(),
                index_name: "docs".to_owned(),
                app_id: "app".to_owned(),
            }),
            ..Default::default()
        };

        let resolved = resolve_theme(&base, &ThemeOverrides::default());

        assert_eq!(resolved.algolia, base.algolia);
        assert_eq!(resolved.google_analytics, None);
    }
}
