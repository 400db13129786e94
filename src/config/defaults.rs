//! Default configuration values

/// Config file location, before tilde expansion
pub const DEFAULT_CONFIG_PATH: &str = "~/.ui-explorer/config.json";

/// Header label and window title
pub const DEFAULT_TITLE: &str = "UI Explorer";

/// Default window geometry
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const DEFAULT_MIN_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_MIN_WINDOW_HEIGHT: f32 = 600.0;

pub const DEFAULT_SIDEBAR_WIDTH: f32 = 280.0;

/// Stdin automation is opt-in
pub const DEFAULT_STDIN_COMMANDS: bool = false;
