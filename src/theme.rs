//! Explorer colour table
//!
//! Colours are plain `0xRRGGBB` numbers so they can live in the JSON config
//! and be copied into click handlers without cloning anything.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerTheme {
    /// Main content background
    pub background: u32,
    /// Sidebar and toolbar background
    pub panel: u32,
    /// Raised surfaces: inactive tabs, description block, code blocks
    pub surface: u32,
    pub border: u32,
    pub text: u32,
    /// Headings and selected items
    pub text_strong: u32,
    /// Section labels
    pub text_muted: u32,
    /// Placeholders and hints
    pub text_dim: u32,
    /// Selected link / active tab background
    pub accent: u32,
    pub hover: u32,
}

impl Default for ExplorerTheme {
    fn default() -> Self {
        Self {
            background: 0x1e1e1e,
            panel: 0x252525,
            surface: 0x2d2d2d,
            border: 0x3d3d3d,
            text: 0xcccccc,
            text_strong: 0xffffff,
            text_muted: 0x888888,
            text_dim: 0x666666,
            accent: 0x4a90d9,
            hover: 0x3d3d3d,
        }
    }
}
