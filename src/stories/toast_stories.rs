//! Toast stories

use gpui::*;
use ui_explorer::layout::story_container;
use ui_explorer::theme::ExplorerTheme;
use ui_explorer::{make_ui_with_description, render_stories, Ui};

pub fn toast_ui(theme: ExplorerTheme) -> Ui {
    make_ui_with_description(
        "Toast",
        "Transient notification anchored to the bottom of the window.",
        render_stories(
            move |message: &&str| {
                story_container(&theme)
                    .child(
                        div()
                            .max_w(px(360.))
                            .p_3()
                            .rounded_md()
                            .border_1()
                            .border_color(rgb(theme.border))
                            .bg(rgb(theme.surface))
                            .text_sm()
                            .child(message.to_string()),
                    )
                    .into_any_element()
            },
            vec![
                ("Short", "Copied to clipboard"),
                (
                    "Long",
                    "Your changes were saved, but two files could not be synced. They will be retried the next time you open the project.",
                ),
            ],
        ),
    )
}
