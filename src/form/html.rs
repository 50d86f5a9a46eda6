//! Form markup rendering.

use serde::Serialize;

use crate::escape::esc_attr;
use crate::render::RenderError;
use crate::templates::{self, Templates};

use super::{Control, FieldNaming, FormField, Width};

/// Help paragraph shown above the feed identifiers.
pub const HELP_TEXT: &str = "To find these values, click the name of your feed on \
<a href=\"https://tagplay.co\">your Tagplay dashboard</a>, click the Get Code button in the \
upper right corner, scroll down and select WordPress in the instructions.";

#[derive(Serialize)]
struct OptionData<'a> {
    value: String,
    label: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct FieldData<'a> {
    id: String,
    name: String,
    label: &'a str,
    value: String,
    checked: bool,
    narrow: bool,
    options: Vec<OptionData<'a>>,
}

/// Renders the admin form markup for `fields`.
///
/// The help paragraph is placed before the `project_id` field.
///
/// # Errors
///
/// Returns [`RenderError`] if a field template fails to render.
pub fn form_html<N: FieldNaming + ?Sized>(
    templates: &Templates,
    naming: &N,
    fields: &[FormField],
) -> Result<String, RenderError> {
    let mut parts = Vec::with_capacity(fields.len() + 1);
    for field in fields {
        if field.key == "project_id" {
            parts.push(format!("<p>{HELP_TEXT}</p>"));
        }
        parts.push(field_html(templates, naming, field)?);
    }
    Ok(parts.join("\n"))
}

fn field_html<N: FieldNaming + ?Sized>(
    templates: &Templates,
    naming: &N,
    field: &FormField,
) -> Result<String, RenderError> {
    let mut data = FieldData {
        id: esc_attr(&naming.field_id(field.key)),
        name: esc_attr(&naming.field_name(field.key)),
        label: &field.label,
        value: String::new(),
        checked: false,
        narrow: false,
        options: Vec::new(),
    };

    let template = match &field.control {
        Control::Select { options } => {
            data.options = options
                .iter()
                .map(|option| OptionData {
                    value: esc_attr(option.value),
                    label: option.label,
                    selected: option.selected,
                })
                .collect();
            templates::SELECT_FIELD
        }
        Control::Checkbox { checked } => {
            data.checked = *checked;
            templates::CHECKBOX_FIELD
        }
        Control::Text { value, width } => {
            data.value = esc_attr(value);
            data.narrow = *width == Width::Narrow;
            templates::TEXT_FIELD
        }
    };

    templates.render(template, &data)
}
