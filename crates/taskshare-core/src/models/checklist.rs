//! Checklist item model.

use serde::{Deserialize, Serialize};

/// A single entry of a task's checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckListItem {
    /// Text of the item
    pub text: String,

    /// Whether the item has been ticked off
    #[serde(default)]
    pub checked: bool,
}

impl CheckListItem {
    /// Create a new checklist item.
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}
