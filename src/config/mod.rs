//! Configuration module - explorer settings
//!
//! Loaded from `~/.ui-explorer/config.json`. Every field has a default, so a
//! missing or partial file is fine.
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, WindowConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::DEFAULT_CONFIG_PATH;
pub use loader::{default_config_path, load_config, load_config_from};
pub use types::{Config, WindowConfig};

#[cfg(test)]
pub use defaults::{
    DEFAULT_MIN_WINDOW_HEIGHT, DEFAULT_MIN_WINDOW_WIDTH, DEFAULT_SIDEBAR_WIDTH, DEFAULT_TITLE,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
