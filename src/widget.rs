//! The widget capability interface and its Tagplay implementation.

use crate::form::{FieldNaming, FormField, form_html, render_fields};
use crate::render::{PassthroughTitle, RenderError, Rendered, TitleFilter, WidgetArgs, render_widget};
use crate::settings::Instance;
use crate::settings::defaults::{WIDGET_DESCRIPTION, WIDGET_NAME};
use crate::templates::Templates;
use crate::validate::validate;

/// What a host needs from a placeable widget.
///
/// A host calls [`form`](Widget::form) to build the admin form,
/// [`update`](Widget::update) with a submission before persisting it, and
/// [`render`](Widget::render) whenever the widget appears on a page.
pub trait Widget {
    /// Returns the editable fields for `instance`.
    fn form(&self, instance: &Instance) -> Vec<FormField>;

    /// Validates a submission. `old_instance` is the stored instance, if any.
    fn update(&self, new_instance: Instance, old_instance: Option<&Instance>) -> Instance;

    /// Renders `instance` inside the host's wrapper markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the markup machinery fails.
    fn render(&self, args: &WidgetArgs, instance: &Instance) -> Result<Rendered, RenderError>;

    /// Name shown in the host's widget list.
    fn name(&self) -> &str;

    /// Short description shown under the name.
    fn description(&self) -> &str;
}

/// The Tagplay feed widget.
///
/// # Type Parameters
///
/// - `F`: the title hook (defaults to [`PassthroughTitle`])
#[derive(Debug)]
pub struct TagplayWidget<F = PassthroughTitle> {
    templates: Templates,
    title_filter: F,
}

impl TagplayWidget<PassthroughTitle> {
    /// Creates a widget with compiled templates and no title hook.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            templates: Templates::new()?,
            title_filter: PassthroughTitle,
        })
    }
}

impl<F> TagplayWidget<F> {
    /// Sets the title hook.
    #[must_use]
    pub fn with_title_filter<F2: TitleFilter>(self, title_filter: F2) -> TagplayWidget<F2> {
        TagplayWidget {
            templates: self.templates,
            title_filter,
        }
    }

    /// Renders the admin form markup for `instance`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a field template fails to render.
    pub fn form_html<N: FieldNaming + ?Sized>(
        &self,
        naming: &N,
        instance: &Instance,
    ) -> Result<String, RenderError> {
        form_html(&self.templates, naming, &render_fields(instance))
    }
}

impl<F: TitleFilter> Widget for TagplayWidget<F> {
    fn form(&self, instance: &Instance) -> Vec<FormField> {
        render_fields(instance)
    }

    fn update(&self, new_instance: Instance, old_instance: Option<&Instance>) -> Instance {
        validate(new_instance, old_instance)
    }

    fn render(&self, args: &WidgetArgs, instance: &Instance) -> Result<Rendered, RenderError> {
        render_widget(&self.templates, &self.title_filter, args, instance)
    }

    fn name(&self) -> &str {
        WIDGET_NAME
    }

    fn description(&self) -> &str {
        WIDGET_DESCRIPTION
    }
}
