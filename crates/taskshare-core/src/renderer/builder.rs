//! Builder for creating and configuring ShareRenderer instances.

use super::ShareRenderer;
use crate::{
    choices::{ChoiceModel, ChoiceResolver},
    display::{
        BuiltinTemplates, DateFormatter, PatternDateFormatter, TemplateEngine, SHARE_TASK_TEMPLATE,
    },
};

/// Builder for creating and configuring [`ShareRenderer`] instances.
///
/// Every collaborator has a default: [`ChoiceModel::default()`],
/// [`PatternDateFormatter::new()`], [`BuiltinTemplates`] and the
/// [`SHARE_TASK_TEMPLATE`] template.
pub struct ShareRendererBuilder {
    choices: Option<Box<dyn ChoiceResolver>>,
    dates: Option<Box<dyn DateFormatter>>,
    engine: Option<Box<dyn TemplateEngine>>,
    template: Option<String>,
}

impl ShareRendererBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            choices: None,
            dates: None,
            engine: None,
            template: None,
        }
    }

    /// Sets the resolver for priority, classification and status titles.
    pub fn with_choices(mut self, choices: impl ChoiceResolver + 'static) -> Self {
        self.choices = Some(Box::new(choices));
        self
    }

    /// Sets the formatter used for all task dates.
    pub fn with_date_formatter(mut self, dates: impl DateFormatter + 'static) -> Self {
        self.dates = Some(Box::new(dates));
        self
    }

    /// Sets the template engine.
    pub fn with_template_engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Sets the name of the template to render.
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Builds the configured renderer.
    pub fn build(self) -> ShareRenderer {
        ShareRenderer::new(
            self.choices
                .unwrap_or_else(|| Box::new(ChoiceModel::default())),
            self.dates
                .unwrap_or_else(|| Box::new(PatternDateFormatter::new())),
            self.engine.unwrap_or_else(|| Box::new(BuiltinTemplates)),
            self.template
                .unwrap_or_else(|| SHARE_TASK_TEMPLATE.to_string()),
        )
    }
}

impl Default for ShareRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}
