//! Host-provided form field ids and names.

/// Maps setting keys to the element id and submitted name of their input.
pub trait FieldNaming {
    /// Element id for `key`.
    fn field_id(&self, key: &str) -> String;

    /// Submitted form name for `key`.
    fn field_name(&self, key: &str) -> String;
}

/// The host's per-placement naming scheme.
///
/// Produces ids like `widget-tagplay_widget-2-feed_id` and names like
/// `widget-tagplay_widget[2][feed_id]`, so several placements can share a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetFieldNaming {
    id_base: String,
    number: u32,
}

impl WidgetFieldNaming {
    /// Creates the naming scheme for placement `number` of widget type `id_base`.
    #[must_use]
    pub fn new(id_base: impl Into<String>, number: u32) -> Self {
        Self {
            id_base: id_base.into(),
            number,
        }
    }
}

impl FieldNaming for WidgetFieldNaming {
    fn field_id(&self, key: &str) -> String {
        format!("widget-{}-{}-{key}", self.id_base, self.number)
    }

    fn field_name(&self, key: &str) -> String {
        format!("widget-{}[{}][{key}]", self.id_base, self.number)
    }
}
