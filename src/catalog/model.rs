//! Track and checklist item records.
//!
//! Both types are built once by the catalog and only read afterwards; fields
//! stay private so item order and the key/catalog pairing cannot drift after
//! construction.

use crate::catalog::identity::{Priority, TrackKey};

#[derive(Clone, Debug, Eq, PartialEq)]
/// One actionable task within a track.
pub struct ChecklistItem {
    category: String,
    description: String,
    priority: Priority,
}

impl ChecklistItem {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            priority,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Named checklist topic with its items in display order.
pub struct Track {
    key: TrackKey,
    name: String,
    summary: String,
    items: Vec<ChecklistItem>,
}

impl Track {
    pub fn new(
        key: &str,
        name: impl Into<String>,
        summary: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Self {
        Self {
            key: TrackKey::normalized(key),
            name: name.into(),
            summary: summary.into(),
            items,
        }
    }

    pub fn key(&self) -> &TrackKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }
}
