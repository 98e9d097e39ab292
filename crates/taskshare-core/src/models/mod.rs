//! Data models for tasks and their enumerated fields.
//!
//! Tasks are read exclusively through the [`TaskFields`] trait: one typed
//! accessor per semantic field, each returning `None` when the field is
//! unset. [`Task`] is the owned record shipped with the crate; other task
//! stores can implement the trait directly.
//!
//! # Examples
//!
//! ```rust
//! use taskshare_core::models::{codes, CheckListItem, Task, TaskFields};
//!
//! let task = Task::new("Buy milk")
//!     .with_checklist(vec![CheckListItem::new("Oat", false)])
//!     .with_status(codes::status::NEEDS_ACTION);
//!
//! assert_eq!(task.title(), "Buy milk");
//! assert!(task.description().is_none());
//! assert_eq!(task.checklist().map(<[CheckListItem]>::len), Some(1));
//! ```

pub mod checklist;
pub mod codes;
pub mod task;


pub use checklist::CheckListItem;
pub use codes::ChoiceField;
pub use task::{Task, TaskDocument, TaskFields};
