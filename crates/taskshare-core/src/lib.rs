//! Core library for rendering tasks into shareable plain text.
//!
//! A task is read through the [`TaskFields`] trait, turned into
//! presence-aware [`Bindings`], and rendered by a template engine into the
//! fixed share layout:
//!
//! - **Models** ([`models`]): the task record, checklist items and
//!   enumerated field codes
//! - **Choices** ([`choices`]): titles for priority, classification and
//!   status codes
//! - **Display** ([`display`]): bindings, date formatting, templates and the
//!   rendered [`ShareText`]
//! - **Renderer** ([`renderer`]): the configured pipeline tying them together
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{civil::date, tz::TimeZone};
//! use taskshare_core::{models::{codes, Task}, render_share_text};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let due = date(2024, 5, 1).at(10, 0, 0, 0).to_zoned(TimeZone::UTC)?;
//! let task = Task::new("Buy milk")
//!     .with_due(due)
//!     .with_timezone(TimeZone::UTC)
//!     .with_status(codes::status::NEEDS_ACTION);
//!
//! let text = render_share_text(&task)?;
//! assert!(text.contains("Due: Wed, May 1, 2024, 10:00 AM UTC"));
//! assert!(text.contains("Status: Needs action"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod choices;
pub mod display;
pub mod error;
pub mod models;
pub mod renderer;

// Re-export commonly used types
pub use choices::{ChoiceModel, ChoiceResolver};
pub use display::{Bindings, ShareText};
pub use error::{Result, ShareError, TemplateError};
pub use models::{CheckListItem, ChoiceField, Task, TaskFields};
pub use renderer::{render_share_text, ShareRenderer, ShareRendererBuilder};
