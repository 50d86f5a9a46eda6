//! Default merging.
//!
//! Every resolved mapping contains exactly the keys of its defaults table,
//! in table order. Unknown keys in the overrides are dropped.

use crate::settings::defaults::{HTML_ID_FEED_CHARS, HTML_ID_PREFIX};
use crate::settings::{CONNECTION_SETTINGS, DISPLAY_ATTRIBUTES, FieldDefault, Instance};

/// Resolves `overrides` against `defaults`, key by key.
#[must_use]
pub fn resolve(defaults: &[FieldDefault], overrides: &Instance) -> Instance {
    defaults
        .iter()
        .map(|field| {
            let value = overrides
                .get(field.key)
                .cloned()
                .unwrap_or_else(|| field.value.to_value());
            (field.key, value)
        })
        .collect()
}

/// Resolves the connection settings, deriving `html_id` from the feed id if unset.
#[must_use]
pub fn base_settings(instance: &Instance) -> Instance {
    let mut settings = resolve(CONNECTION_SETTINGS, instance);
    if !settings.is_truthy("html_id") && settings.is_truthy("feed_id") {
        let feed_id = settings.string("feed_id");
        let prefix: String = feed_id.chars().take(HTML_ID_FEED_CHARS).collect();
        settings.insert("html_id", format!("{HTML_ID_PREFIX}{prefix}"));
    }
    settings
}

/// Resolves the display attributes.
#[must_use]
pub fn display_attributes(instance: &Instance) -> Instance {
    resolve(DISPLAY_ATTRIBUTES, instance)
}

/// Resolves a complete instance: connection settings followed by display attributes.
#[must_use]
pub fn complete(instance: &Instance) -> Instance {
    base_settings(instance).union(display_attributes(instance))
}
