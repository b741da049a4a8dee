//! # Selection State
//!
//! The three pieces of user-chosen state that shape the visible rows:
//! a category filter, a free-text name search, and a sort method.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ordering applied to the filtered entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    #[default]
    CategoryAsc,
    CategoryDesc,
    NameAsc,
    NameDesc,
}

impl SortMethod {
    pub const ALL: [SortMethod; 4] = [
        SortMethod::CategoryAsc,
        SortMethod::CategoryDesc,
        SortMethod::NameAsc,
        SortMethod::NameDesc,
    ];

    /// Label shown in the sort picker and status bar.
    pub fn label(self) -> &'static str {
        match self {
            SortMethod::CategoryAsc => "Category ↓",
            SortMethod::CategoryDesc => "Category ↑",
            SortMethod::NameAsc => "Name ↓",
            SortMethod::NameDesc => "Name ↑",
        }
    }

    /// Parses the kebab-case form used in config files and env vars.
    pub fn from_config_str(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_category: Option<String>,
    pub search_text: Option<String>,
    pub sort_method: SortMethod,
}

impl SelectionState {
    /// The category filter, treating `Some("")` the same as `None`.
    pub fn category(&self) -> Option<&str> {
        self.selected_category.as_deref().filter(|c| !c.is_empty())
    }

    /// The search text, treating `Some("")` the same as `None`.
    pub fn search(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|s| !s.is_empty())
    }
}
