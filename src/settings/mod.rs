//! Settings model for Tagplay widgets.
//!
//! This module provides:
//! - Setting values ([`Value`]) and typed defaults ([`DefaultValue`], [`FieldDefault`])
//! - The ordered per-widget settings bag ([`Instance`])
//! - The compile-time default tables and constants ([`defaults`])

pub mod defaults;
mod instance;
mod value;

#[cfg(test)]
mod instance_tests;

pub use defaults::{CONNECTION_SETTINGS, DISPLAY_ATTRIBUTES, INVERTED_ATTRIBUTES};
pub use instance::Instance;
pub use value::{Choice, DefaultValue, FieldDefault, FieldKind, Value};
