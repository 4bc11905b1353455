//! Request-side filter and order shapes.
//!
//! All fields default to their zero value, and every zero value means "no
//! restriction": an empty inclusion set matches everything, `only_visible =
//! false` never excludes anything, an empty order field applies no ordering.
//! Callers relying on those defaults get the whole collection back.

use serde::{Deserialize, Serialize};

/// Filter for listing races.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceFilter {
    /// Inclusion set of meeting ids. Empty = unrestricted.
    pub meeting_ids: Vec<i64>,
    /// When true, restrict to visible races. When false, no restriction —
    /// this never becomes a "non-visible only" filter.
    pub only_visible: bool,
}

/// Filter for listing sporting events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventFilter {
    /// Inclusion set of sport category labels. Empty = unrestricted.
    pub sports: Vec<String>,
    /// When true, restrict to visible events. When false, no restriction.
    pub only_visible: bool,
}

/// Optional single-field ascending order request.
///
/// The field name is matched case-insensitively against a per-resource
/// allow-list; an empty, whitespace, or unrecognized name simply applies no
/// ordering. There is no descending or multi-key ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSpec {
    /// Column name to order by, ascending. Empty = no ordering.
    pub field: String,
}

impl OrderSpec {
    /// Order by the given field, ascending.
    pub fn by(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    /// True when no ordering was requested at all.
    pub fn is_empty(&self) -> bool {
        self.field.trim().is_empty()
    }
}
