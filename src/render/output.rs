//! Widget markup rendering.

use serde::Serialize;
use tracing::{debug, warn};

use crate::attributes::stringify;
use crate::escape::{esc_attr, esc_html};
use crate::merge::{base_settings, display_attributes};
use crate::settings::Instance;
use crate::settings::defaults::MISCONFIGURED_NOTICE;
use crate::templates::{self, Templates};

use super::{RenderError, RenderOutcome, Rendered, ScriptAsset, TitleFilter, WidgetArgs};

/// Template data for the widget container.
#[derive(Serialize)]
struct WidgetData {
    html_id: String,
    project: String,
    feed: String,
    token: String,
    attributes: String,
}

/// Renders `instance` wrapped in the host's `args` markup.
///
/// # Errors
///
/// Returns [`RenderError`] only if the templates or the script URL fail;
/// missing identifiers produce a [`RenderOutcome::Misconfigured`] result.
pub fn render_widget<F: TitleFilter + ?Sized>(
    templates: &Templates,
    title_filter: &F,
    args: &WidgetArgs,
    instance: &Instance,
) -> Result<Rendered, RenderError> {
    let settings = base_settings(instance);
    let attributes = display_attributes(instance);

    let mut html = args.before_widget.clone();

    if settings.is_truthy("title") {
        html.push_str(&args.before_title);
        html.push_str(&title_filter.filter_title(esc_html(&settings.string("title"))));
        html.push_str(&args.after_title);
    }

    let missing: Vec<&str> = ["project_id", "feed_id", "token"]
        .into_iter()
        .filter(|key| !settings.is_truthy(key))
        .collect();

    if !missing.is_empty() {
        warn!(missing = ?missing, "Misconfigured Tagplay widget");
        html.push_str(MISCONFIGURED_NOTICE);
        html.push_str(&args.after_widget);
        return Ok(Rendered {
            html,
            outcome: RenderOutcome::Misconfigured,
        });
    }

    let data = WidgetData {
        html_id: esc_attr(&settings.string("html_id")),
        project: esc_attr(&settings.string("project_id")),
        feed: esc_attr(&settings.string("feed_id")),
        token: esc_attr(&settings.string("token")),
        attributes: stringify(&attributes),
    };
    html.push_str(&templates.render(templates::WIDGET, &data)?);
    html.push_str(&args.after_widget);

    let script = ScriptAsset::widget_script(&settings.string("widget_version"))?;
    debug!(html_id = %data.html_id, script = %script.src, "Rendered Tagplay widget");

    Ok(Rendered {
        html,
        outcome: RenderOutcome::Rendered { script },
    })
}
