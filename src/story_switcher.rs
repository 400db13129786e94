//! Story switcher
//!
//! The widget every UI uses to show its stories: a row of tabs, one per
//! story, above the content of the resolved story. Payloads are opaque here;
//! only the UI's own view function ever looks at them.

use std::rc::Rc;

use gpui::*;

use crate::catalog::RenderContext;

/// Shown instead of content when a UI has no stories.
pub const NO_STORIES_TEXT: &str = "No stories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryTab<'a> {
    pub id: &'a str,
    pub active: bool,
}

/// Resolved switcher state for one render.
#[derive(Debug)]
pub struct StorySwitch<'a, P> {
    pub tabs: Vec<StoryTab<'a>>,
    /// Id and payload of the story whose content is shown.
    pub current: Option<(&'a str, &'a P)>,
}

/// Resolve which story to show and which tab to highlight.
///
/// With no story selected the first story is shown and its tab is active.
/// A selected id that matches nothing still shows the first story, but no tab
/// is highlighted.
pub fn switch_stories<'a, P>(stories: &'a [(String, P)], selected: Option<&str>) -> StorySwitch<'a, P> {
    let first = stories.first();
    let resolved = match selected {
        Some(selected) => stories
            .iter()
            .find(|(id, _)| id == selected)
            .or(first),
        None => first,
    };

    let tabs = stories
        .iter()
        .enumerate()
        .map(|(index, (id, _))| StoryTab {
            id: id.as_str(),
            active: match selected {
                Some(selected) => id == selected,
                None => index == 0,
            },
        })
        .collect();

    StorySwitch {
        tabs,
        current: resolved.map(|(id, payload)| (id.as_str(), payload)),
    }
}

/// Build a UI render function from a story list and a view for one payload.
///
/// ```ignore
/// make_ui("Button", render_stories(
///     |label: &&str| div().child(*label).into_any_element(),
///     vec![("Loading", "Loading..."), ("Loaded", "Save")],
/// ))
/// ```
pub fn render_stories<S, P, F>(view: F, stories: Vec<(S, P)>) -> impl Fn(&RenderContext) -> AnyElement + 'static
where
    S: Into<String>,
    P: 'static,
    F: Fn(&P) -> AnyElement + 'static,
{
    let stories: Rc<Vec<(String, P)>> = Rc::new(
        stories
            .into_iter()
            .map(|(id, payload)| (id.into(), payload))
            .collect(),
    );
    move |cx: &RenderContext| render_switcher(&stories, &view, cx)
}

fn render_switcher<P>(
    stories: &[(String, P)],
    view: &dyn Fn(&P) -> AnyElement,
    cx: &RenderContext,
) -> AnyElement {
    let theme = cx.theme;
    let switch = switch_stories(stories, cx.selection.story());

    let Some((_, payload)) = switch.current else {
        return div()
            .p_4()
            .text_sm()
            .text_color(rgb(theme.text_dim))
            .child(NO_STORIES_TEXT)
            .into_any_element();
    };

    let tabs = div()
        .flex()
        .flex_row()
        .gap_1()
        .px_4()
        .py_2()
        .border_b_1()
        .border_color(rgb(theme.border))
        .children(switch.tabs.iter().map(|tab| {
            let story_id = tab.id.to_string();
            let story_cx = cx.clone();
            let base = div()
                .id(ElementId::Name(format!("story-tab-{}", tab.id).into()))
                .px_3()
                .py_1()
                .rounded_sm()
                .text_sm()
                .cursor_pointer()
                .child(tab.id.to_string())
                .on_click(move |_event, _window, _cx| {
                    story_cx.select_story(story_id.clone());
                });

            if tab.active {
                base.bg(rgb(theme.accent)).text_color(rgb(theme.text_strong))
            } else {
                base.bg(rgb(theme.surface))
                    .text_color(rgb(theme.text))
                    .hover(|s| s.bg(rgb(theme.hover)))
            }
        }));

    div()
        .flex()
        .flex_col()
        .w_full()
        .child(tabs)
        .child(div().p_4().child(view(payload)))
        .into_any_element()
}
