//! Default values for configuration options.

/// Default path of the instance store file.
pub const STORE_PATH: &str = "tagplay-instances.json";

/// Default configuration file name written by `init`.
pub const CONFIG_FILE: &str = "tagplay-widget.toml";

/// Default widget type base used in form field ids and names.
pub const ID_BASE: &str = "tagplay_widget";

/// Default placement number for commands that take one.
pub const PLACEMENT: u32 = 1;
