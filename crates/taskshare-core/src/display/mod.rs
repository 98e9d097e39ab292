//! Everything between a task and its share text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Task       │    │    Bindings     │    │    Template     │
//! │  (TaskFields)   │───▶│ (flags, values) │───▶│     Engine      │───▶ ShareText
//! │                 │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                          ▲            ▲
//!                  ChoiceResolver   TimeFormatter
//! ```
//!
//! ## Module Organization
//!
//! - [`bindings`]: Presence-aware bindings and the builder producing them
//! - [`datetime`]: Date formatting collaborator and time zone suffixes
//! - [`template`]: Template engine seam and the built-in share layout
//! - [`share_text`]: The rendered result

pub mod bindings;
pub mod datetime;
pub mod share_text;
pub mod template;

pub use bindings::{BindingBuilder, Bindings};
pub use datetime::{DateFormatter, DateStyle, PatternDateFormatter, TimeFormatter};
pub use share_text::ShareText;
pub use template::{BuiltinTemplates, TemplateEngine, ATTRIBUTION, SHARE_TASK_TEMPLATE};
