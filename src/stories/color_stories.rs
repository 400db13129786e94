//! Foundation stories: the explorer palette, plus an entry with no stories yet.

use gpui::*;
use ui_explorer::layout::{story_container, story_item, story_section};
use ui_explorer::theme::ExplorerTheme;
use ui_explorer::{make_ui, make_ui_with_description, render_stories, Ui};

pub fn colors_ui(theme: ExplorerTheme) -> Ui {
    make_ui_with_description(
        "Colors",
        "Palette used by the explorer chrome. Override any entry under \"theme\" in the config file.",
        render_stories(
            move |swatches: &Vec<(&'static str, u32)>| {
                story_container(&theme)
                    .child(story_section(&theme, "Swatches").children(swatches.iter().map(
                        |(name, color)| {
                            story_item(
                                &theme,
                                name,
                                div()
                                    .w(px(48.))
                                    .h(px(24.))
                                    .rounded_sm()
                                    .border_1()
                                    .border_color(rgb(theme.border))
                                    .bg(rgb(*color)),
                            )
                        },
                    )))
                    .into_any_element()
            },
            vec![
                (
                    "Surfaces",
                    vec![
                        ("background", theme.background),
                        ("panel", theme.panel),
                        ("surface", theme.surface),
                        ("border", theme.border),
                    ],
                ),
                (
                    "Text",
                    vec![
                        ("text", theme.text),
                        ("textStrong", theme.text_strong),
                        ("textMuted", theme.text_muted),
                        ("textDim", theme.text_dim),
                    ],
                ),
                ("Accent", vec![("accent", theme.accent), ("hover", theme.hover)]),
            ],
        ),
    )
}

pub fn icons_ui() -> Ui {
    make_ui(
        "Icons",
        render_stories(
            |_: &()| div().into_any_element(),
            Vec::<(&str, ())>::new(),
        ),
    )
}
