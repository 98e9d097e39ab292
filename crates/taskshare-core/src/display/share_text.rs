//! Result wrapper holding the rendered share text of a task.

use std::{fmt, ops::Deref};

use crate::{error::Result, models::TaskFields, renderer::ShareRenderer};

/// The rendered, shareable text of a task.
///
/// The text is rendered once, when the value is created, and never again:
/// every read returns the same stored string.
///
/// # Examples
///
/// ```rust
/// use taskshare_core::{models::Task, ShareRenderer, ShareText};
///
/// let renderer = ShareRenderer::default();
/// let text = ShareText::render(&renderer, &Task::new("Buy milk")).unwrap();
///
/// assert!(text.starts_with("Buy milk\n"));
/// assert!(text.ends_with("Shared by Taskshare"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareText(String);

impl ShareText {
    /// Renders `task` with `renderer`.
    ///
    /// # Errors
    ///
    /// Fails with the first error raised while building bindings or
    /// rendering the template; no partial text is produced.
    pub fn render(renderer: &ShareRenderer, task: &dyn TaskFields) -> Result<Self> {
        let bindings = renderer.bindings(task)?;
        renderer.render(&bindings).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for ShareText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ShareText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShareText> for String {
    fn from(text: ShareText) -> Self {
        text.0
    }
}

impl fmt::Display for ShareText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
