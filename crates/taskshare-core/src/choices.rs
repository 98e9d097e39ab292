//! Resolution of enumerated field codes to display titles.

use std::{collections::BTreeMap, ops::RangeInclusive};

use crate::{
    error::{Result, ShareError},
    models::{codes, ChoiceField},
};

/// Maps an enumerated code of a field to its human-readable title.
///
/// Implementations must be deterministic and must fail with
/// [`ShareError::UnknownChoice`] for codes they do not know instead of
/// returning a placeholder.
pub trait ChoiceResolver {
    fn title_for(&self, field: ChoiceField, code: i32) -> Result<String>;
}

/// Table-backed [`ChoiceResolver`].
///
/// `ChoiceModel::empty()` starts empty; `ChoiceModel::default()` carries the
/// English titles for every standard code.
///
/// # Examples
///
/// ```rust
/// use taskshare_core::{ChoiceModel, ChoiceResolver, models::ChoiceField};
///
/// let choices = ChoiceModel::empty().with_choice(ChoiceField::Status, 0, "Open");
/// assert_eq!(choices.title_for(ChoiceField::Status, 0).unwrap(), "Open");
/// assert!(choices.title_for(ChoiceField::Status, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceModel {
    titles: BTreeMap<(ChoiceField, i32), String>,
}

impl ChoiceModel {
    /// Creates a model without any choices.
    ///
    /// Use [`ChoiceModel::default()`] for the standard English titles.
    pub fn empty() -> Self {
        Self {
            titles: BTreeMap::new(),
        }
    }

    /// Registers the title of a single code, replacing any previous title.
    pub fn with_choice(mut self, field: ChoiceField, code: i32, title: impl Into<String>) -> Self {
        self.titles.insert((field, code), title.into());
        self
    }

    /// Registers the same title for every code in `codes`.
    pub fn with_range(
        mut self,
        field: ChoiceField,
        codes: RangeInclusive<i32>,
        title: impl Into<String>,
    ) -> Self {
        let title = title.into();
        for code in codes {
            self.titles.insert((field, code), title.clone());
        }
        self
    }
}

impl Default for ChoiceModel {
    fn default() -> Self {
        use codes::{classification, priority, status};
        use ChoiceField::{Classification, Priority, Status};

        Self::empty()
            .with_choice(Priority, priority::UNDEFINED, "None")
            .with_range(Priority, priority::HIGHEST..=4, "High")
            .with_choice(Priority, priority::MEDIUM, "Medium")
            .with_range(Priority, 6..=priority::LOWEST, "Low")
            .with_choice(Classification, classification::PUBLIC, "Public")
            .with_choice(Classification, classification::PRIVATE, "Private")
            .with_choice(Classification, classification::CONFIDENTIAL, "Confidential")
            .with_choice(Status, status::NEEDS_ACTION, "Needs action")
            .with_choice(Status, status::IN_PROCESS, "In process")
            .with_choice(Status, status::COMPLETED, "Completed")
            .with_choice(Status, status::CANCELLED, "Cancelled")
    }
}

impl ChoiceResolver for ChoiceModel {
    fn title_for(&self, field: ChoiceField, code: i32) -> Result<String> {
        self.titles
            .get(&(field, code))
            .cloned()
            .ok_or(ShareError::UnknownChoice { field, code })
    }
}
