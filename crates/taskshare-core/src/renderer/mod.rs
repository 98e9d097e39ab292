//! Share text rendering for tasks.
//!
//! [`ShareRenderer`] ties the collaborators together: it builds
//! [`Bindings`] from a task through a [`ChoiceResolver`] and a
//! [`DateFormatter`], serializes them into a template context, and hands
//! that context to a [`TemplateEngine`].
//!
//! # Usage
//!
//! ```rust
//! use taskshare_core::{
//!     display::PatternDateFormatter, models::Task, ShareRendererBuilder,
//! };
//!
//! let renderer = ShareRendererBuilder::new()
//!     .with_date_formatter(PatternDateFormatter::new().with_details_pattern("%Y-%m-%d %H:%M"))
//!     .build();
//!
//! let text = renderer.share_text(&Task::new("Buy milk")).unwrap();
//! assert!(text.contains("Buy milk"));
//! ```
//!
//! Rendering is synchronous and keeps no state between calls; every call
//! builds its own bindings.

pub mod builder;

use log::{debug, trace};

pub use builder::ShareRendererBuilder;

use crate::{
    choices::ChoiceResolver,
    display::{BindingBuilder, Bindings, DateFormatter, ShareText, TemplateEngine},
    error::{Result, ShareError},
    models::TaskFields,
};

/// Renders tasks into share text.
pub struct ShareRenderer {
    choices: Box<dyn ChoiceResolver>,
    dates: Box<dyn DateFormatter>,
    engine: Box<dyn TemplateEngine>,
    template: String,
}

impl ShareRenderer {
    pub(crate) fn new(
        choices: Box<dyn ChoiceResolver>,
        dates: Box<dyn DateFormatter>,
        engine: Box<dyn TemplateEngine>,
        template: String,
    ) -> Self {
        Self {
            choices,
            dates,
            engine,
            template,
        }
    }

    /// Name of the template this renderer uses.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Builds the template bindings of `task`.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::UnknownChoice` if an enumerated code has no title
    /// Returns `ShareError::DateFormat` if a date cannot be formatted
    pub fn bindings(&self, task: &dyn TaskFields) -> Result<Bindings> {
        BindingBuilder::new(self.choices.as_ref(), self.dates.as_ref()).build(task)
    }

    /// Renders previously built bindings with the configured template.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::Template` if the template is unknown or fails to
    /// evaluate against the bindings
    pub fn render(&self, bindings: &Bindings) -> Result<String> {
        debug!("Rendering template '{}'", self.template);
        let context = bindings.to_context()?;
        let output = self
            .engine
            .process(&self.template, &context)
            .map_err(|e| ShareError::template(&self.template).with_source(e))?;
        trace!("{output}");
        Ok(output)
    }

    /// Builds and renders the share text of `task`.
    ///
    /// # Errors
    ///
    /// Any error of [`ShareRenderer::bindings`] or [`ShareRenderer::render`]
    pub fn share_text(&self, task: &dyn TaskFields) -> Result<ShareText> {
        ShareText::render(self, task)
    }
}

impl Default for ShareRenderer {
    fn default() -> Self {
        ShareRendererBuilder::new().build()
    }
}

/// Renders the share text of `task` with the default configuration.
///
/// # Errors
///
/// See [`ShareRenderer::share_text`]
pub fn render_share_text(task: &dyn TaskFields) -> Result<ShareText> {
    ShareRenderer::default().share_text(task)
}
