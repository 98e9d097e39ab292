//! Template engine seam and the built-in share template.
//!
//! A [`TemplateEngine`] turns a named template and a key/value context into
//! text. [`BuiltinTemplates`] ships the only layout this crate needs,
//! [`SHARE_TASK_TEMPLATE`]:
//!
//! ```text
//! <title>
//! <'=' for every title character>
//!
//! <description>
//! [X] checked item
//! [ ] unchecked item
//!
//! Location: <location>
//! Start: <start>
//! Due: <due>
//! Completed: <completed>
//! Priority: <priority>
//! Privacy: <privacy>
//! Status: <status>
//! <url>
//!
//! --
//! Shared by Taskshare
//! ```
//!
//! Every line but the title block and the attribution is conditional on the
//! matching `hasX` flag of the context.

use std::fmt::Write;

use serde_json::{Map, Value};

use crate::error::TemplateError;

/// Name of the built-in share text template.
pub const SHARE_TASK_TEMPLATE: &str = "sharetask";

/// Trailing attribution line of the share text.
pub const ATTRIBUTION: &str = "Shared by Taskshare";

/// Renders named templates against a key/value context.
pub trait TemplateEngine {
    fn process(&self, name: &str, context: &Map<String, Value>) -> Result<String, TemplateError>;
}

/// Engine serving the templates compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateEngine for BuiltinTemplates {
    fn process(&self, name: &str, context: &Map<String, Value>) -> Result<String, TemplateError> {
        match name {
            SHARE_TASK_TEMPLATE => share_task(&Context(context)),
            _ => Err(TemplateError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

/// Typed reads from a template context.
struct Context<'a>(&'a Map<String, Value>);

impl<'a> Context<'a> {
    fn value(&self, key: &str) -> Result<&'a Value, TemplateError> {
        self.0.get(key).ok_or_else(|| TemplateError::MissingKey {
            key: key.to_string(),
        })
    }

    fn flag(&self, key: &str) -> Result<bool, TemplateError> {
        self.value(key)?
            .as_bool()
            .ok_or_else(|| invalid(key, "boolean"))
    }

    fn text(&self, key: &str) -> Result<&'a str, TemplateError> {
        self.value(key)?
            .as_str()
            .ok_or_else(|| invalid(key, "string"))
    }

    fn list(&self, key: &str) -> Result<&'a [Value], TemplateError> {
        self.value(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| invalid(key, "list"))
    }

    /// The value of `key` if the flag `has` is set.
    fn optional_text(&self, has: &str, key: &str) -> Result<Option<&'a str>, TemplateError> {
        if self.flag(has)? {
            self.text(key).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn invalid(key: &str, expected: &'static str) -> TemplateError {
    TemplateError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn share_task(context: &Context<'_>) -> Result<String, TemplateError> {
    let mut out = String::new();

    let title = context.text("title")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)?;

    let mut body = String::new();
    if let Some(description) = context.optional_text("hasDescription", "description")? {
        writeln!(body, "{description}")?;
    }
    if context.flag("hasCheckListItems")? {
        for item in context.list("checkListItems")? {
            let item = Context(
                item.as_object()
                    .ok_or_else(|| invalid("checkListItems", "list of items"))?,
            );
            let mark = if item.flag("checked")? { 'X' } else { ' ' };
            writeln!(body, "[{mark}] {}", item.text("text")?)?;
        }
    }
    if !body.is_empty() {
        writeln!(out, "{body}")?;
    }

    for (label, has, key) in [
        ("Location", "hasLocation", "location"),
        ("Start", "hasStart", "startDateTime"),
        ("Due", "hasDue", "dueDateTime"),
        ("Completed", "hasCompleted", "completedDateTime"),
        ("Priority", "hasPriority", "priority"),
        ("Privacy", "hasPrivacy", "privacy"),
        ("Status", "hasStatus", "status"),
    ] {
        if let Some(value) = context.optional_text(has, key)? {
            writeln!(out, "{label}: {value}")?;
        }
    }
    if let Some(url) = context.optional_text("hasUrl", "url")? {
        writeln!(out, "{url}")?;
    }

    writeln!(out)?;
    writeln!(out, "--")?;
    write!(out, "{ATTRIBUTION}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn title_only() -> Value {
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
    }

    #[test]
    fn test_title_only_layout() {
        let output = BuiltinTemplates
            .process(SHARE_TASK_TEMPLATE, &context(title_only()))
            .unwrap();

        assert_eq!(output, "Buy milk\n========\n\n\n--\nShared by Taskshare");
    }

    #[test]
    fn test_full_layout() {
        let mut value = title_only();
        let map = value.as_object_mut().unwrap();
        for (key, entry) in [
            ("hasDescription", json!(true)),
            ("description", json!("Two litres")),
            ("hasCheckListItems", json!(true)),
            (
                "checkListItems",
                json!([
                    {"text": "Oat", "checked": true},
                    {"text": "Soy", "checked": false}
                ]),
            ),
            ("hasLocation", json!(true)),
            ("location", json!("Corner shop")),
            ("hasDue", json!(true)),
            ("dueDateTime", json!("Wed, May 1, 2024, 10:00 AM UTC")),
            ("hasPriority", json!(true)),
            ("priority", json!("High")),
            ("hasUrl", json!(true)),
            ("url", json!("https://example.com/")),
        ] {
            map.insert(key.to_string(), entry);
        }

        let output = BuiltinTemplates
            .process(SHARE_TASK_TEMPLATE, &context(value))
            .unwrap();

        assert_eq!(
            output,
            "Buy milk\n\
             ========\n\
             \n\
             Two litres\n\
             [X] Oat\n\
             [ ] Soy\n\
             \n\
             Location: Corner shop\n\
             Due: Wed, May 1, 2024, 10:00 AM UTC\n\
             Priority: High\n\
             https://example.com/\n\
             \n\
             --\n\
             Shared by Taskshare"
        );
    }

    #[test]
    fn test_underline_counts_characters() {
        let mut value = title_only();
        value["title"] = json!("Café");

        let output = BuiltinTemplates
            .process(SHARE_TASK_TEMPLATE, &context(value))
            .unwrap();
        assert!(output.starts_with("Café\n====\n"));
    }

    #[test]
    fn test_unknown_template() {
        let result = BuiltinTemplates.process("missing", &context(title_only()));
        assert!(matches!(result, Err(TemplateError::NotFound { name }) if name == "missing"));
    }

    #[test]
    fn test_flag_without_value_fails() {
        let mut value = title_only();
        value["hasLocation"] = json!(true);

        let result = BuiltinTemplates.process(SHARE_TASK_TEMPLATE, &context(value));
        assert!(matches!(result, Err(TemplateError::MissingKey { key }) if key == "location"));
    }

    #[test]
    fn test_wrongly_typed_flag_fails() {
        let mut value = title_only();
        value["hasUrl"] = json!("yes");

        let result = BuiltinTemplates.process(SHARE_TASK_TEMPLATE, &context(value));
        assert!(matches!(
            result,
            Err(TemplateError::InvalidValue { key, expected: "boolean" }) if key == "hasUrl"
        ));
    }
}
