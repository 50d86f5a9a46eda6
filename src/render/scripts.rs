//! External script assets and the page script queue.

use url::Url;

use crate::escape::esc_attr;
use crate::settings::defaults::{SCRIPT_BASE_URL, SCRIPT_FILE, SCRIPT_HANDLE};

use super::RenderError;

/// An external script a rendered widget needs on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptAsset {
    /// Queue handle; assets sharing a handle are loaded once.
    pub handle: &'static str,
    /// Script URL.
    pub src: Url,
}

impl ScriptAsset {
    /// Builds the hosted widget script asset for `version`.
    ///
    /// The version is inserted as a single, percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ScriptUrl`] if the base URL cannot hold path segments.
    pub fn widget_script(version: &str) -> Result<Self, RenderError> {
        let mut src = Url::parse(SCRIPT_BASE_URL).map_err(|e| RenderError::ScriptUrl(e.to_string()))?;
        src.path_segments_mut()
            .map_err(|()| RenderError::ScriptUrl(format!("{SCRIPT_BASE_URL} cannot be a base")))?
            .pop_if_empty()
            .push(version)
            .push(SCRIPT_FILE);

        Ok(Self {
            handle: SCRIPT_HANDLE,
            src,
        })
    }

    /// Renders the `<script>` tag loading this asset.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<script type=\"text/javascript\" src=\"{}\" id=\"{}-js\"></script>",
            esc_attr(self.src.as_str()),
            esc_attr(self.handle)
        )
    }
}

/// Ordered, handle-deduplicated list of scripts requested during a page render.
///
/// The first asset enqueued under a handle wins.
#[derive(Debug, Clone, Default)]
pub struct ScriptQueue {
    assets: Vec<ScriptAsset>,
}

impl ScriptQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Enqueues `asset` unless its handle is already queued.
    ///
    /// Returns `true` if the asset was added.
    pub fn enqueue(&mut self, asset: ScriptAsset) -> bool {
        if self.assets.iter().any(|a| a.handle == asset.handle) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    /// Queued assets, in enqueue order.
    #[must_use]
    pub fn assets(&self) -> &[ScriptAsset] {
        &self.assets
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Renders all queued `<script>` tags, one per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.assets
            .iter()
            .map(ScriptAsset::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
