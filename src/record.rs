//! The index record data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag for an index record. The set is closed: the generator only ever
/// emits these eight strings, and deserializing anything else is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
    Module,
    Constant,
    Type,
    Method,
    Function,
    Macro,
}

impl Category {
    /// All categories, in the order they are reported by `stats`.
    pub const ALL: [Self; 8] = [
        Self::Page,
        Self::Section,
        Self::Module,
        Self::Constant,
        Self::Type,
        Self::Method,
        Self::Function,
        Self::Macro,
    ];

    /// The lowercase wire form of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Module => "module",
            Self::Constant => "constant",
            Self::Type => "type",
            Self::Method => "method",
            Self::Function => "function",
            Self::Macro => "macro",
        }
    }

    /// Whether records of this category describe something invocable.
    /// Callable records are required to carry a non-empty title.
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Method | Self::Function)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Error for a category string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?}; expected one of page, section, module, constant, type, method, function, macro")]
pub struct UnknownCategory(pub String);

/// One entry in a static search index: a documented symbol, section, or page.
///
/// Records are immutable once built. `(location, title)` pairs are not unique;
/// a type and its constructor method commonly share a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexRecord {
    /// Page path plus optional in-page `#anchor`.
    pub location: String,
    /// Human-readable page name.
    pub page: String,
    /// Entry title; may repeat across records that share a page.
    pub title: String,
    /// Free-text excerpt; may be empty.
    pub text: String,
    /// Kind tag from the closed category set.
    pub category: Category,
}

impl IndexRecord {
    /// The page-path portion of `location`, without any anchor.
    pub fn page_path(&self) -> &str {
        self.location
            .split_once('#')
            .map_or(self.location.as_str(), |(path, _)| path)
    }

    /// The in-page anchor, if `location` carries one.
    pub fn anchor(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor)
    }
}
