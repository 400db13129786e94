//! Button stories

use gpui::*;
use ui_explorer::layout::{code_block, story_container, story_divider, story_item, story_section};
use ui_explorer::theme::ExplorerTheme;
use ui_explorer::{make_ui_with_description, render_stories, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Default,
    Loading,
    Disabled,
}

pub fn button_ui(theme: ExplorerTheme) -> Ui {
    make_ui_with_description(
        "Button",
        "Primary call to action. Swaps its label for a progress hint while loading and dims when disabled.",
        render_stories(
            move |state: &ButtonState| render_button(&theme, *state),
            vec![
                ("Default", ButtonState::Default),
                ("Loading", ButtonState::Loading),
                ("Disabled", ButtonState::Disabled),
            ],
        ),
    )
}

fn render_button(theme: &ExplorerTheme, state: ButtonState) -> AnyElement {
    let (label, background, opacity) = match state {
        ButtonState::Default => ("Save", theme.accent, 1.0),
        ButtonState::Loading => ("Saving\u{2026}", theme.accent, 0.8),
        ButtonState::Disabled => ("Save", theme.surface, 0.5),
    };

    let button = div()
        .px_4()
        .py_1()
        .rounded_md()
        .bg(rgb(background))
        .text_color(rgb(theme.text_strong))
        .opacity(opacity)
        .child(label);

    story_container(theme)
        .child(story_section(theme, "Preview").child(story_item(theme, &format!("{:?}", state), button)))
        .child(story_divider(theme))
        .child(code_block(theme, "Button::new(\"Save\").loading(true)"))
        .into_any_element()
}
