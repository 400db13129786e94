//! View composition for the explorer window
//!
//! Each part has a pure resolver (what to show) and a GPUI render function
//! (how to show it). Rendering never mutates state: clicks go out through the
//! [`EventSink`](crate::navigation::EventSink) or the
//! [`Navigator`](crate::location::Navigator).

pub mod content;
pub mod sidebar;

pub use content::{render_content, resolve_content, ContentView, PLACEHOLDER_TEXT};
pub use sidebar::{
    adjacent_link, render_sidebar, sidebar_sections, Direction, SidebarLink, SidebarSection,
};
