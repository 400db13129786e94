//! Badge stories

use gpui::*;
use ui_explorer::layout::{story_container, story_item, story_section};
use ui_explorer::theme::ExplorerTheme;
use ui_explorer::{make_ui, render_stories, Ui};

struct Badge {
    label: &'static str,
    color: u32,
}

pub fn badge_ui(theme: ExplorerTheme) -> Ui {
    make_ui(
        "Badge",
        render_stories(
            move |badge: &Badge| {
                story_container(&theme)
                    .child(
                        story_section(&theme, "Preview").child(story_item(
                            &theme,
                            badge.label,
                            div()
                                .px_2()
                                .rounded_sm()
                                .text_xs()
                                .bg(rgb(badge.color))
                                .text_color(rgb(theme.background))
                                .child(badge.label),
                        )),
                    )
                    .into_any_element()
            },
            vec![
                ("Info", Badge { label: "Info", color: 0x4a90d9 }),
                ("Success", Badge { label: "Done", color: 0x4caf50 }),
                ("Warning", Badge { label: "Stale", color: 0xfbbf24 }),
                ("Error", Badge { label: "Failed", color: 0xe5534b }),
            ],
        ),
    )
}
