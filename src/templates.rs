//! Handlebars templates for widget and form markup.
//!
//! Every value passed to these templates is escaped by the caller with
//! [`crate::escape`], so templates use raw (`{{{ }}}`) interpolation.

use std::fmt;

use handlebars::Handlebars;
use serde::Serialize;

use crate::render::RenderError;

/// Template name of the widget container and loader script.
pub const WIDGET: &str = "widget";
/// Template name of a select form field.
pub const SELECT_FIELD: &str = "select_field";
/// Template name of a checkbox form field.
pub const CHECKBOX_FIELD: &str = "checkbox_field";
/// Template name of a text input form field.
pub const TEXT_FIELD: &str = "text_field";

const WIDGET_TEMPLATE: &str = r#"<div id="{{{html_id}}}" class="tagplay-widget" data-project="{{{project}}}" data-feed="{{{feed}}}" data-token="{{{token}}}"{{#if attributes}} {{{attributes}}}{{/if}}></div>
<script>
var widgetElement = document.getElementById("{{{html_id}}}");
if (typeof TagplayWidget === "function") {
  TagplayWidget(widgetElement);
} else {
  if (!window.tagplayWidgetQueue) window.tagplayWidgetQueue = [];
  window.tagplayWidgetQueue.push(widgetElement);
}
</script>
"#;

const SELECT_TEMPLATE: &str = r#"<p>
<label for="{{{id}}}">{{{label}}}</label>
<select id="{{{id}}}" name="{{{name}}}">
{{#each options}}<option value="{{{value}}}"{{#if selected}} selected='selected'{{/if}}>{{{label}}}</option>
{{/each}}</select>
</p>"#;

const CHECKBOX_TEMPLATE: &str = r#"<p>
<input class="checkbox" id="{{{id}}}" name="{{{name}}}" type="checkbox"{{#if checked}} checked='checked'{{/if}}>
<label for="{{{id}}}">{{{label}}}</label>
</p>"#;

const TEXT_TEMPLATE: &str = r#"<p>
<label for="{{{id}}}">{{{label}}}</label>
<input id="{{{id}}}" name="{{{name}}}" type="text" value="{{{value}}}"{{#if narrow}} size="3"{{else}} class="widefat"{{/if}}>
</p>"#;

/// Registered markup templates.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

impl Templates {
    /// Compiles all templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in [
            (WIDGET, WIDGET_TEMPLATE),
            (SELECT_FIELD, SELECT_TEMPLATE),
            (CHECKBOX_FIELD, CHECKBOX_TEMPLATE),
            (TEXT_FIELD, TEXT_TEMPLATE),
        ] {
            registry
                .register_template_string(name, source)
                .map_err(|e| RenderError::Template {
                    name,
                    source: Box::new(e),
                })?;
        }

        Ok(Self { registry })
    }

    /// Renders the template `name` with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if rendering fails.
    pub fn render<T: Serialize>(&self, name: &'static str, data: &T) -> Result<String, RenderError> {
        self.registry
            .render(name, data)
            .map_err(|e| RenderError::Render {
                name,
                source: Box::new(e),
            })
    }
}
