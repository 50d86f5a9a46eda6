//! Admin form rendering.
//!
//! This module provides:
//! - Form field descriptors ([`FormField`], [`Control`], [`Width`])
//! - Field descriptor generation ([`render_fields`])
//! - Host field naming ([`FieldNaming`], [`WidgetFieldNaming`])
//! - Form markup ([`form_html`])
//!
//! # Control selection
//!
//! Connection settings are always free text. For display attributes:
//! 1. fields with an enumerated choice list render as a select
//! 2. fields whose default is boolean render as a checkbox
//! 3. everything else renders as text; numeric fields get a narrow input

mod fields;
mod html;
mod naming;


pub use fields::{Control, FormField, SelectOption, Width, label, render_fields};
pub use html::{HELP_TEXT, form_html};
pub use naming::{FieldNaming, WidgetFieldNaming};
