//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::theme::ExplorerTheme;

/// Window geometry in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
    #[serde(default = "default_min_window_width")]
    pub min_width: f32,
    #[serde(default = "default_min_window_height")]
    pub min_height: f32,
}

fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}
fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}
fn default_min_window_width() -> f32 {
    DEFAULT_MIN_WINDOW_WIDTH
}
fn default_min_window_height() -> f32 {
    DEFAULT_MIN_WINDOW_HEIGHT
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            min_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_height: DEFAULT_MIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Sidebar header label and window title (default: "UI Explorer")
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
    /// Location to open on startup, e.g. "#Atoms/Button/Loading"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_location: Option<String>,
    /// Accept JSONL navigation commands on stdin (default: false)
    #[serde(default = "default_stdin_commands")]
    pub stdin_commands: bool,
    #[serde(default)]
    pub theme: ExplorerTheme,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_sidebar_width() -> f32 {
    DEFAULT_SIDEBAR_WIDTH
}
fn default_stdin_commands() -> bool {
    DEFAULT_STDIN_COMMANDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_title(),
            window: WindowConfig::default(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            initial_location: None,
            stdin_commands: DEFAULT_STDIN_COMMANDS,
            theme: ExplorerTheme::default(),
        }
    }
}
