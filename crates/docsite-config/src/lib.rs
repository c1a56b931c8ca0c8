//! Site configuration for the docs site.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! A [`SiteConfig`] is constructed once at load time and never mutated
//! afterwards; the consuming framework expects referential stability
//! across a single build. Theme options are resolved from a base theme
//! record plus the site-level `[theme]` overrides section, site fields
//! taking precedence (see [`theme::resolve_theme`]).
//!
//! Validation here is structural only: non-empty title, an http(s) site
//! URL, a `/`-delimited base URL, and non-empty credential fields when a
//! credentials section is present. Referential integrity (dangling
//! routes, missing assets) is owned by the consuming framework.

pub mod theme;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use theme::{
    Algolia, ColorMode, ColorModeDefault, Footer, FooterColumn, FooterLink, GoogleAnalytics, Logo,
    Navbar, NavbarItem, NavbarPosition, ThemeConfig, ThemeOverrides, resolve_theme,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Site configuration.
///
/// A single immutable record of build-time options handed to the hosting
/// framework: site metadata, theme options, and the preset list.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Short tagline shown alongside the title.
    pub tagline: String,
    /// Canonical site URL.
    pub url: String,
    /// Base path the site is served under (leading and trailing slash).
    pub base_url: String,
    /// What the framework should do with broken internal links.
    pub on_broken_links: BrokenLinkPolicy,
    /// Favicon path.
    pub favicon: String,
    /// Organization identifier.
    pub organization_name: String,
    /// Project identifier.
    pub project_name: String,
    /// Theme overrides as parsed from the `[theme]` section.
    theme: ThemeOverrides,
    /// Presets in activation order.
    pub presets: Vec<Preset>,

    /// Resolved theme configuration (set after loading).
    #[serde(skip)]
    pub theme_resolved: ThemeConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: String::new(),
            url: "http://localhost:3000".to_owned(),
            base_url: "/".to_owned(),
            on_broken_links: BrokenLinkPolicy::Warn,
            favicon: "img/favicon.ico".to_owned(),
            organization_name: String::new(),
            project_name: String::new(),
            theme: ThemeOverrides::default(),
            presets: Vec::new(),
            theme_resolved: ThemeConfig::default(),
            config_path: None,
        }
    }
}

/// Policy for broken internal links, enforced by the consuming framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    #[default]
    Warn,
    Error,
    Ignore,
    Throw,
}

/// A named, externally-defined bundle of build behavior activated by an
/// options table. The options are opaque to this crate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preset {
    /// Preset name.
    pub name: String,
    /// Opaque options handed to the preset.
    pub options: toml::Table,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from a specific file.
    ///
    /// An empty file yields the default record. The resolved theme and
    /// config path are populated, and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be parsed, or
    /// fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;

        let mut config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            toml::from_str(&content)?
        };

        config.theme_resolved = resolve_theme(&ThemeConfig::default(), &config.theme);
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Load configuration, searching `start_dir` and its parents for a
    /// `docsite.toml`.
    ///
    /// Falls back to the default record when no config file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file can't be parsed or fails
    /// validation.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start_dir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Theme overrides as parsed from the config file, before resolution.
    #[must_use]
    pub fn theme_overrides(&self) -> &ThemeOverrides {
        &self.theme
    }

    /// Validate configuration values.
    ///
    /// Checks structural shape only; called automatically after loading
    /// from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.url, "url")?;
        require_http_url(&self.url, "url")?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with /".to_owned(),
            ));
        }

        for preset in &self.presets {
            require_non_empty(&preset.name, "presets.name")?;
        }

        if let Some(ga) = &self.theme_resolved.google_analytics {
            require_non_empty(&ga.tracking_id, "theme.google_analytics.tracking_id")?;
        }
        if let Some(algolia) = &self.theme_resolved.algolia {
            require_non_empty(&algolia.api_key, "theme.algolia.api_key")?;
            require_non_empty(&algolia.index_name, "theme.algolia.index_name")?;
            require_non_empty(&algolia.app_id, "theme.algolia.app_id")?;
        }

        Ok(())
    }
}

/// Search for the config file in `dir` and its parents.
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current = dir.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
