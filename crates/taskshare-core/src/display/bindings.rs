//! Template bindings built from a task.
//!
//! [`Bindings`] holds everything the share template may print. Each optional
//! field is a single `Option`: its presence flag is `is_some()`, so a value
//! can never exist without its flag or vice versa. Serializing a
//! [`Bindings`] produces the flat key/value context template engines consume:
//! a `hasX` flag for every optional field, plus the value key only when the
//! flag is `true`.

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{Map, Value};

use super::datetime::{DateFormatter, TimeFormatter};
use crate::{
    choices::ChoiceResolver,
    error::{Result, ShareError},
    models::{codes, CheckListItem, ChoiceField, TaskFields},
};

/// Display values of a task, ready for rendering.
///
/// Only [`BindingBuilder`] fills in optional values, so a present checklist
/// always has at least one item and a present text is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    title: String,
    description: Option<String>,
    checklist: Option<Vec<CheckListItem>>,
    location: Option<String>,
    start: Option<String>,
    due: Option<String>,
    completed: Option<String>,
    priority: Option<String>,
    privacy: Option<String>,
    status: Option<String>,
    url: Option<String>,
}

impl Bindings {
    /// Bindings for a task with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            checklist: None,
            location: None,
            start: None,
            due: None,
            completed: None,
            priority: None,
            privacy: None,
            status: None,
            url: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn checklist(&self) -> Option<&[CheckListItem]> {
        self.checklist.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Formatted start date/time
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// Formatted due date/time
    pub fn due(&self) -> Option<&str> {
        self.due.as_deref()
    }

    /// Formatted completion date/time
    pub fn completed(&self) -> Option<&str> {
        self.completed.as_deref()
    }

    /// Priority title
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Classification title
    pub fn privacy(&self) -> Option<&str> {
        self.privacy.as_deref()
    }

    /// Status title, absent for completed tasks
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn has_checklist(&self) -> bool {
        self.checklist.is_some()
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_due(&self) -> bool {
        self.due.is_some()
    }

    pub fn has_completed(&self) -> bool {
        self.completed.is_some()
    }

    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }

    pub fn has_privacy(&self) -> bool {
        self.privacy.is_some()
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    /// Converts the bindings into the key/value context handed to a
    /// [`TemplateEngine`](super::template::TemplateEngine).
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Serialization` if the context cannot be built
    pub fn to_context(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ShareError::invalid_input("bindings")
                .with_reason(format!("expected a map, got {other}"))),
        }
    }
}

/// Writes a presence flag and, when present, the value under its key.
fn serialize_optional<M, T>(
    map: &mut M,
    flag: &str,
    key: &str,
    value: Option<&T>,
) -> std::result::Result<(), M::Error>
where
    M: SerializeMap,
    T: Serialize + ?Sized,
{
    map.serialize_entry(flag, &value.is_some())?;
    if let Some(value) = value {
        map.serialize_entry(key, value)?;
    }
    Ok(())
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let texts = [
            ("hasDescription", "description", self.description()),
            ("hasLocation", "location", self.location()),
            ("hasStart", "startDateTime", self.start()),
            ("hasDue", "dueDateTime", self.due()),
            ("hasCompleted", "completedDateTime", self.completed()),
            ("hasPriority", "priority", self.priority()),
            ("hasPrivacy", "privacy", self.privacy()),
            ("hasStatus", "status", self.status()),
            ("hasUrl", "url", self.url()),
        ];

        map.serialize_entry("title", &self.title)?;
        for (flag, key, value) in texts {
            serialize_optional(&mut map, flag, key, value)?;
        }
        serialize_optional(
            &mut map,
            "hasCheckListItems",
            "checkListItems",
            self.checklist(),
        )?;
        map.end()
    }
}

/// Builds [`Bindings`] from a task's fields.
///
/// Choice titles and dates are resolved only for fields that are present.
/// Any resolver or formatter failure aborts the whole build.
pub struct BindingBuilder<'a> {
    choices: &'a dyn ChoiceResolver,
    times: TimeFormatter<'a>,
}

impl<'a> BindingBuilder<'a> {
    pub fn new(choices: &'a dyn ChoiceResolver, dates: &'a dyn DateFormatter) -> Self {
        Self {
            choices,
            times: TimeFormatter::new(dates),
        }
    }

    /// Builds the bindings of `task`.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::UnknownChoice` if a priority, classification or
    /// status code has no title
    /// Returns `ShareError::DateFormat` if a date cannot be formatted
    pub fn build(&self, task: &dyn TaskFields) -> Result<Bindings> {
        let zone = task.timezone();
        let format_time = |time: Option<&jiff::Zoned>| {
            time.map(|time| self.times.format(time, zone)).transpose()
        };

        // A completed task already says so through its completion date.
        let status = task
            .status()
            .filter(|&status| status != codes::status::COMPLETED);

        Ok(Bindings {
            title: task.title().to_string(),
            description: non_empty(task.description()),
            checklist: task
                .checklist()
                .filter(|items| !items.is_empty())
                .map(<[CheckListItem]>::to_vec),
            location: non_empty(task.location()),
            start: format_time(task.start())?,
            due: format_time(task.due())?,
            completed: format_time(task.completed())?,
            priority: self.choice(ChoiceField::Priority, task.priority())?,
            privacy: self.choice(ChoiceField::Classification, task.classification())?,
            status: self.choice(ChoiceField::Status, status)?,
            url: task.url().map(ToString::to_string),
        })
    }

    fn choice(&self, field: ChoiceField, code: Option<i32>) -> Result<Option<String>> {
        code.map(|code| self.choices.title_for(field, code))
            .transpose()
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use jiff::{civil::date, tz::TimeZone, Zoned};
    use serde_json::json;

    use super::*;
    use crate::{choices::ChoiceModel, display::datetime::PatternDateFormatter, models::Task};

    /// Resolver that records every lookup it receives.
    struct RecordingChoices {
        inner: ChoiceModel,
        calls: RefCell<Vec<(ChoiceField, i32)>>,
    }

    impl ChoiceResolver for RecordingChoices {
        fn title_for(&self, field: ChoiceField, code: i32) -> Result<String> {
            self.calls.borrow_mut().push((field, code));
            self.inner.title_for(field, code)
        }
    }

    fn due() -> Zoned {
        date(2024, 5, 1).at(10, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    fn build(task: &Task) -> Result<Bindings> {
        let choices = ChoiceModel::default();
        let dates = PatternDateFormatter::new();
        BindingBuilder::new(&choices, &dates).build(task)
    }

    #[test]
    fn test_title_only() {
        let bindings = build(&Task::new("Buy milk")).unwrap();
        assert_eq!(bindings, Bindings::titled("Buy milk"));
    }

    #[test]
    fn test_empty_text_is_absent() {
        let task = Task::new("x").with_description("").with_location("");
        let bindings = build(&task).unwrap();

        assert!(!bindings.has_description());
        assert!(!bindings.has_location());
    }

    #[test]
    fn test_empty_checklist_is_absent() {
        let bindings = build(&Task::new("x").with_checklist(Vec::new())).unwrap();
        assert!(!bindings.has_checklist());
    }

    #[test]
    fn test_empty_checklist_is_not_bound_in_context() {
        let bindings = build(&Task::new("x").with_checklist(Vec::new())).unwrap();
        let context = bindings.to_context().unwrap();

        assert!(bindings.checklist().is_none());
        assert_eq!(context["hasCheckListItems"], json!(false));
        assert!(!context.contains_key("checkListItems"));
    }

    #[test]
    fn test_checklist_keeps_order() {
        let items = vec![
            CheckListItem::new("first", true),
            CheckListItem::new("second", false),
            CheckListItem::new("third", true),
        ];
        let bindings = build(&Task::new("x").with_checklist(items.clone())).unwrap();
        assert_eq!(bindings.checklist, Some(items));
    }

    #[test]
    fn test_dates_use_task_timezone() {
        let task = Task::new("x").with_due(due()).with_timezone(TimeZone::UTC);
        let bindings = build(&task).unwrap();

        assert_eq!(
            bindings.due.as_deref(),
            Some("Wed, May 1, 2024, 10:00 AM UTC")
        );
        assert!(!bindings.has_start());
        assert!(!bindings.has_completed());
    }

    #[test]
    fn test_dates_are_shown_in_task_timezone() {
        let zone = TimeZone::get("America/New_York").unwrap();
        let task = Task::new("x").with_due(due()).with_timezone(zone);
        let bindings = build(&task).unwrap();

        assert_eq!(bindings.due(), Some("Wed, May 1, 2024, 6:00 AM EDT"));
    }

    #[test]
    fn test_completed_status_is_suppressed() {
        let task = Task::new("x")
            .with_status(codes::status::COMPLETED)
            .with_completed(due());
        let bindings = build(&task).unwrap();

        assert!(!bindings.has_status());
        assert!(bindings.has_completed());
    }

    #[test]
    fn test_other_statuses_are_shown() {
        for (code, title) in [
            (codes::status::NEEDS_ACTION, "Needs action"),
            (codes::status::IN_PROCESS, "In process"),
            (codes::status::CANCELLED, "Cancelled"),
        ] {
            let bindings = build(&Task::new("x").with_status(code)).unwrap();
            assert_eq!(bindings.status.as_deref(), Some(title));
        }
    }

    #[test]
    fn test_choices_resolved_only_when_present() {
        let choices = RecordingChoices {
            inner: ChoiceModel::default(),
            calls: RefCell::new(Vec::new()),
        };
        let dates = PatternDateFormatter::new();
        let builder = BindingBuilder::new(&choices, &dates);

        builder.build(&Task::new("x")).unwrap();
        assert!(choices.calls.borrow().is_empty());

        builder
            .build(&Task::new("x").with_classification(codes::classification::PRIVATE))
            .unwrap();
        assert_eq!(
            *choices.calls.borrow(),
            vec![(ChoiceField::Classification, codes::classification::PRIVATE)]
        );
    }

    #[test]
    fn test_unknown_priority_fails() {
        let result = build(&Task::new("x").with_priority(42));
        assert!(matches!(
            result,
            Err(ShareError::UnknownChoice {
                field: ChoiceField::Priority,
                code: 42
            })
        ));
    }

    #[test]
    fn test_date_failure_fails_build() {
        let choices = ChoiceModel::default();
        let dates = PatternDateFormatter::new().with_details_pattern("%J");
        let result = BindingBuilder::new(&choices, &dates).build(&Task::new("x").with_start(due()));

        assert!(matches!(result, Err(ShareError::DateFormat { .. })));
    }

    #[test]
    fn test_context_of_title_only() {
        let context = Bindings::titled("Buy milk").to_context().unwrap();

        assert_eq!(
            Value::Object(context),
            json!({
                "title": "Buy milk",
                "hasDescription": false,
                "hasCheckListItems": false,
                "hasLocation": false,
                "hasStart": false,
                "hasDue": false,
                "hasCompleted": false,
                "hasPriority": false,
                "hasPrivacy": false,
                "hasStatus": false,
                "hasUrl": false,
            })
        );
    }

    #[test]
    fn test_context_value_keys_follow_flags() {
        let bindings = Bindings {
            description: Some("Two litres".to_string()),
            checklist: Some(vec![CheckListItem::new("Oat", true)]),
            due: Some("tomorrow".to_string()),
            status: Some("Needs action".to_string()),
            url: Some("https://example.com/".to_string()),
            ..Bindings::titled("Buy milk")
        };
        let context = bindings.to_context().unwrap();

        assert_eq!(context["hasDescription"], json!(true));
        assert_eq!(context["description"], json!("Two litres"));
        assert_eq!(
            context["checkListItems"],
            json!([{"text": "Oat", "checked": true}])
        );
        assert_eq!(context["dueDateTime"], json!("tomorrow"));
        assert_eq!(context["status"], json!("Needs action"));
        assert_eq!(context["url"], json!("https://example.com/"));

        for (flag, key) in [
            ("hasLocation", "location"),
            ("hasStart", "startDateTime"),
            ("hasCompleted", "completedDateTime"),
            ("hasPriority", "priority"),
            ("hasPrivacy", "privacy"),
        ] {
            assert_eq!(context[flag], json!(false));
            assert!(!context.contains_key(key), "{key} must not be bound");
        }
    }
}
