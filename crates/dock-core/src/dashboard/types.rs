//! Core data types for the dashboard.
//!
//! Field names are camelCase on the wire so exports stay interchangeable
//! with the browser version of the dashboard.

use serde::{Deserialize, Serialize};

use crate::note::NoteBody;

/// A single quick-launch shortcut inside a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Display title
    pub title: String,

    /// Absolute URL (unique within its tab)
    pub url: String,

    /// Favicon service URL derived from `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// A named group of shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

/// A bookmark inside a category, optionally carrying a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: String,

    /// Display name (unique within its category)
    pub name: String,

    /// Link; empty when the user gave no valid URL
    #[serde(default)]
    pub link: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Rich-text note, plain or encrypted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_details: Option<NoteBody>,
}

/// A named group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<CategoryItem>,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub tabs: Vec<Tab>,
    pub categories: Vec<Category>,
}
