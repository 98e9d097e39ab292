//! Task model definition and typed field access.

use jiff::{tz::TimeZone, Zoned};
use serde::{Deserialize, Serialize};
use url::Url;

use super::CheckListItem;
use crate::error::{Result, ShareError};

/// Typed, read-only access to the fields of a task.
///
/// Every optional accessor returns `None` when the field is unset; an unset
/// field is never represented by a sentinel such as an empty string.
pub trait TaskFields {
    /// Title of the task
    fn title(&self) -> &str;

    /// Free-form description
    fn description(&self) -> Option<&str>;

    /// Checklist items in display order
    fn checklist(&self) -> Option<&[CheckListItem]>;

    /// Location text
    fn location(&self) -> Option<&str>;

    /// Start date/time
    fn start(&self) -> Option<&Zoned>;

    /// Due date/time
    fn due(&self) -> Option<&Zoned>;

    /// Completion date/time
    fn completed(&self) -> Option<&Zoned>;

    /// Time zone the task's dates are expressed in
    fn timezone(&self) -> Option<&TimeZone>;

    /// Priority code, see [`crate::models::codes::priority`]
    fn priority(&self) -> Option<i32>;

    /// Classification code, see [`crate::models::codes::classification`]
    fn classification(&self) -> Option<i32>;

    /// Status code, see [`crate::models::codes::status`]
    fn status(&self) -> Option<i32>;

    /// Related URL
    fn url(&self) -> Option<&Url>;
}

/// Represents a task with all shareable fields.
#[derive(Debug, Clone, Default)]
pub struct Task {
    /// Title of the task
    pub title: String,

    /// Detailed multi-line description of the task
    pub description: Option<String>,

    /// Checklist items, in order
    pub checklist: Option<Vec<CheckListItem>>,

    /// Where the task takes place
    pub location: Option<String>,

    /// When work on the task starts
    pub start: Option<Zoned>,

    /// When the task is due
    pub due: Option<Zoned>,

    /// When the task was completed
    pub completed: Option<Zoned>,

    /// Time zone of the task
    pub timezone: Option<TimeZone>,

    /// Priority code
    pub priority: Option<i32>,

    /// Classification code
    pub classification: Option<i32>,

    /// Status code
    pub status: Option<i32>,

    /// Related URL
    pub url: Option<Url>,
}

impl Task {
    /// Create a task with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse a task from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Serialization` if the JSON is malformed
    /// Returns `ShareError::InvalidInput` if the time zone or URL is invalid
    pub fn from_json(json: &str) -> Result<Self> {
        let document: TaskDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_checklist(mut self, items: Vec<CheckListItem>) -> Self {
        self.checklist = Some(items);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_start(mut self, start: Zoned) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_due(mut self, due: Zoned) -> Self {
        self.due = Some(due);
        self
    }

    pub fn with_completed(mut self, completed: Zoned) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn with_timezone(mut self, timezone: TimeZone) -> Self {
        self.timezone = Some(timezone);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_classification(mut self, classification: i32) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }
}

impl TaskFields for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn checklist(&self) -> Option<&[CheckListItem]> {
        self.checklist.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn start(&self) -> Option<&Zoned> {
        self.start.as_ref()
    }

    fn due(&self) -> Option<&Zoned> {
        self.due.as_ref()
    }

    fn completed(&self) -> Option<&Zoned> {
        self.completed.as_ref()
    }

    fn timezone(&self) -> Option<&TimeZone> {
        self.timezone.as_ref()
    }

    fn priority(&self) -> Option<i32> {
        self.priority
    }

    fn classification(&self) -> Option<i32> {
        self.classification
    }

    fn status(&self) -> Option<i32> {
        self.status
    }

    fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

/// Serialized form of a task, as exchanged in JSON.
///
/// Dates use RFC 9557 notation (`2024-05-01T10:00:00+00:00[UTC]`) and the
/// time zone is an IANA name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDocument {
    pub title: String,
    pub description: Option<String>,
    pub checklist: Option<Vec<CheckListItem>>,
    pub location: Option<String>,
    pub start: Option<Zoned>,
    pub due: Option<Zoned>,
    pub completed: Option<Zoned>,
    pub timezone: Option<String>,
    pub priority: Option<i32>,
    pub classification: Option<i32>,
    pub status: Option<i32>,
    pub url: Option<String>,
}

impl TryFrom<TaskDocument> for Task {
    type Error = ShareError;

    fn try_from(document: TaskDocument) -> Result<Self> {
        let timezone = document
            .timezone
            .map(|name| {
                TimeZone::get(&name).map_err(|e| {
                    ShareError::invalid_input("timezone").with_reason(format!("{name}: {e}"))
                })
            })
            .transpose()?;

        let url = document
            .url
            .map(|raw| {
                Url::parse(&raw).map_err(|e| {
                    ShareError::invalid_input("url").with_reason(format!("{raw}: {e}"))
                })
            })
            .transpose()?;

        Ok(Task {
            title: document.title,
            description: document.description,
            checklist: document.checklist,
            location: document.location,
            start: document.start,
            due: document.due,
            completed: document.completed,
            timezone,
            priority: document.priority,
            classification: document.classification,
            status: document.status,
            url,
        })
    }
}
