//! Layout helpers for story content
//!
//! Host UIs use these inside their story views so every story in the
//! explorer gets the same spacing and label styling.

use gpui::*;

use crate::theme::ExplorerTheme;

/// Container for story content
pub fn story_container(theme: &ExplorerTheme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_4()
        .bg(rgb(theme.background))
        .w_full()
}

/// Section with title
pub fn story_section(theme: &ExplorerTheme, title: &str) -> Div {
    div().flex().flex_col().gap_2().child(
        div()
            .text_sm()
            .text_color(rgb(theme.text_muted))
            .child(title.to_string()),
    )
}

/// Item row with label and element
pub fn story_item(theme: &ExplorerTheme, label: &str, element: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_4()
        .child(
            div()
                .w(px(120.))
                .text_sm()
                .text_color(rgb(theme.text_dim))
                .child(label.to_string()),
        )
        .child(element)
}

/// Monospace block for usage snippets
pub fn code_block(theme: &ExplorerTheme, code: &str) -> Div {
    div()
        .font_family("Menlo")
        .text_sm()
        .p_2()
        .bg(rgb(theme.surface))
        .text_color(rgb(theme.text))
        .rounded_md()
        .overflow_hidden()
        .child(code.to_string())
}

/// Horizontal divider
pub fn story_divider(theme: &ExplorerTheme) -> Div {
    div().h(px(1.)).w_full().bg(rgb(theme.border)).my_2()
}
