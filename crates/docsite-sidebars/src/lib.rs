//! Sidebar navigation manifest for the docs site.
//!
//! A manifest maps sidebar names to ordered trees of [`NavEntry`]: a
//! node is either a [`Doc`](NavEntry::Doc) page slug or a labeled
//! [`Category`] holding an ordered list of child entries, nested to
//! arbitrary depth. The tagged variant lets a renderer recurse
//! uniformly: a doc resolves to a content route, a category renders its
//! label as a non-clickable header and recurses into its children in
//! listed order.
//!
//! The manifest is constructed once from a JSON file and read-only
//! afterwards. It does not validate referential integrity — a slug
//! pointing at a missing content route is the consuming framework's
//! build error, not ours. [`SidebarManifest::check`] reports shape
//! oddities (duplicate sibling labels, empty categories) as warnings.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "someSidebar": [
//!     "sdk-overview",
//!     { "type": "category", "label": "Setup Guide",
//!       "items": ["venv-setup", "intellij-setup"] },
//!     "sdk-data-model"
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A node in the navigation tree: a page reference or a labeled category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// A single page slug, serialized as a bare string.
    Doc(String),
    /// A labeled category of child entries.
    Category(Category),
}

impl NavEntry {
    /// A doc entry for `slug`.
    pub fn doc(slug: impl Into<String>) -> Self {
        Self::Doc(slug.into())
    }

    /// A category entry with the given label and children.
    pub fn category(label: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self::Category(Category::new(label, items))
    }

    /// True for doc entries.
    #[must_use]
    pub fn is_doc(&self) -> bool {
        matches!(self, Self::Doc(_))
    }

    /// Slug of a doc entry, `None` for categories.
    #[must_use]
    pub fn as_doc(&self) -> Option<&str> {
        match self {
            Self::Doc(slug) => Some(slug),
            Self::Category(_) => None,
        }
    }
}

/// A labeled category: a non-clickable header plus an ordered list of
/// child entries. Zero children is permitted by the data shape; the
/// renderer decides whether such a category is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "type")]
    kind: CategoryKind,
    /// Display label, unique within a sibling list by convention.
    pub label: String,
    /// Child entries in display order.
    pub items: Vec<NavEntry>,
}

impl Category {
    /// Create a category with the given label and children.
    pub fn new(label: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            kind: CategoryKind::Category,
            label: label.into(),
            items,
        }
    }
}

/// Wire tag for category objects (`"type": "category"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CategoryKind {
    Category,
}

/// Preorder traversal over a list of entries and their descendants.
///
/// Visits every node exactly once, in author order. Entries form trees
/// by construction, so traversal always terminates.
#[must_use]
pub fn walk(entries: &[NavEntry]) -> Walk<'_> {
    Walk {
        stack: entries.iter().rev().collect(),
    }
}

/// Iterator returned by [`walk`].
pub struct Walk<'a> {
    stack: Vec<&'a NavEntry>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NavEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        if let NavEntry::Category(category) = entry {
            self.stack.extend(category.items.iter().rev());
        }
        Some(entry)
    }
}

/// Number of doc entries in the tree.
#[must_use]
pub fn doc_count(entries: &[NavEntry]) -> usize {
    walk(entries).filter(|e| e.is_doc()).count()
}

/// Maximum nesting depth: 0 for an empty list, 1 for a flat list, +1 per
/// category level.
#[must_use]
pub fn max_depth(entries: &[NavEntry]) -> usize {
    entries
        .iter()
        .map(|entry| match entry {
            NavEntry::Doc(_) => 1,
            NavEntry::Category(category) => 1 + max_depth(&category.items),
        })
        .max()
        .unwrap_or(0)
}

/// Named sidebar trees, as loaded from the manifest file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarManifest {
    sidebars: BTreeMap<String, Vec<NavEntry>>,
}

/// Manifest error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// File not found.
    #[error("Sidebar manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Requested sidebar is not in the manifest.
    #[error("Unknown sidebar: {0}")]
    UnknownSidebar(String),
}

/// Shape oddity reported by [`SidebarManifest::check`].
///
/// These are warnings, not errors: the source format permits both, and
/// the renderer decides what to do with them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SidebarWarning {
    /// Two sibling categories share a label; the framework's routing
    /// assumes sibling labels are unique.
    #[error("sidebar `{sidebar}`: duplicate category label `{label}` among siblings")]
    DuplicateLabel { sidebar: String, label: String },
    /// A category with no children renders as a header with no content.
    #[error("sidebar `{sidebar}`: category `{label}` has no items")]
    EmptyCategory { sidebar: String, label: String },
}

impl SidebarManifest {
    /// Parse a manifest from JSON content.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or doesn't match the
    /// wire format.
    pub fn from_json(content: &str) -> Result<Self, SidebarError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or can't be parsed.
    pub fn from_file(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            return Err(SidebarError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Root entries of a named sidebar.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[NavEntry]> {
        self.sidebars.get(name).map(Vec::as_slice)
    }

    /// Root entries of a named sidebar, erroring when absent.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::UnknownSidebar` if `name` is not in the
    /// manifest.
    pub fn sidebar(&self, name: &str) -> Result<&[NavEntry], SidebarError> {
        self.get(name)
            .ok_or_else(|| SidebarError::UnknownSidebar(name.to_owned()))
    }

    /// Sidebar names in deterministic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.keys().map(String::as_str)
    }

    /// Iterate over `(name, root entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.sidebars
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// True when the manifest has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Report shape oddities across all sidebars.
    ///
    /// Walks every sibling list looking for duplicate category labels
    /// and empty categories. Warnings are reported in traversal order.
    #[must_use]
    pub fn check(&self) -> Vec<SidebarWarning> {
        let mut warnings = Vec::new();
        for (name, entries) in &self.sidebars {
            check_siblings(name, entries, &mut warnings);
        }
        warnings
    }
}

impl FromIterator<(String, Vec<NavEntry>)> for SidebarManifest {
    fn from_iter<I: IntoIterator<Item = (String, Vec<NavEntry>)>>(iter: I) -> Self {
        Self {
            sidebars: iter.into_iter().collect(),
        }
    }
}

/// Check one sibling list, then recurse into each category.
fn check_siblings(sidebar: &str, entries: &[NavEntry], warnings: &mut Vec<SidebarWarning>) {
    let mut seen = HashSet::new();
    for entry in entries {
        let NavEntry::Category(category) = entry else {
            continue;
        };
        if !seen.insert(category.label.as_str()) {
            warnings.push(SidebarWarning::DuplicateLabel {
                sidebar: sidebar.to_owned(),
                label: category.label.clone(),
            });
        }
        if category.items.is_empty() {
            warnings.push(SidebarWarning::EmptyCategory {
                sidebar: sidebar.to_owned(),
                label: category.label.clone(),
            });
        }
        check_siblings(sidebar, &category.items, warnings);
    }
}
