use serde::{Deserialize, Serialize};

/// A single cheatsheet entry: a keybind and the program it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The keybind itself, e.g. `meta + i`.
    pub title: String,
    /// Optional tag naming the owning program. Empty when not given.
    #[serde(default)]
    pub tag: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
        }
    }
}

/// Snapshot of the add form's values taken when the user submits.
///
/// Only the add form builds these; the record is moved into the
/// persistence layer and never kept by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    primary_value: String,
    tag_value: String,
}

impl SubmissionRecord {
    pub(crate) fn new(primary_value: impl Into<String>, tag_value: impl Into<String>) -> Self {
        Self {
            primary_value: primary_value.into(),
            tag_value: tag_value.into(),
        }
    }

    /// The keybind value.
    pub fn primary_value(&self) -> &str {
        &self.primary_value
    }

    /// The tag value, possibly empty.
    pub fn tag_value(&self) -> &str {
        &self.tag_value
    }
}

impl From<SubmissionRecord> for Item {
    fn from(record: SubmissionRecord) -> Self {
        Self {
            title: record.primary_value,
            tag: record.tag_value,
        }
    }
}
