//! Sidebar: header plus one block of UI links per category.

use gpui::*;

use crate::catalog::Catalog;
use crate::location::Navigator;
use crate::navigation::{EventSink, ExplorerEvent};
use crate::path_codec::{encode, Location, Selection};
use crate::theme::ExplorerTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub label: String,
    pub href: Location,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub title: String,
    pub links: Vec<SidebarLink>,
}

/// Build the sidebar menu. A link is selected when its UI id equals the
/// selected UI id, whatever category either lives in.
pub fn sidebar_sections(catalog: &Catalog, selection: &Selection) -> Vec<SidebarSection> {
    catalog
        .categories()
        .iter()
        .map(|category| SidebarSection {
            title: category.title().to_string(),
            links: category
                .uis()
                .iter()
                .filter_map(|ui| {
                    let href = encode(Some(category.title()), Some(ui.id()), None)?;
                    Some(SidebarLink {
                        label: ui.id().to_string(),
                        href,
                        selected: selection.ui() == Some(ui.id()),
                    })
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Location of the link before/after the current one, in sidebar order.
///
/// The current link is the one whose href matches the selection's category
/// and UI. Several links can be highlighted when UI ids repeat, so the first
/// highlighted link is only used when no href matches. Stops at either end.
/// With nothing selected both directions land on the first link.
pub fn adjacent_link(
    sections: &[SidebarSection],
    selection: &Selection,
    direction: Direction,
) -> Option<Location> {
    let links: Vec<&SidebarLink> = sections.iter().flat_map(|s| s.links.iter()).collect();
    let current = encode(selection.category(), selection.ui(), None);
    let cursor = current
        .and_then(|href| links.iter().position(|link| link.href == href))
        .or_else(|| links.iter().position(|link| link.selected));
    let target = match cursor {
        None => 0,
        Some(pos) => match direction {
            Direction::Up => pos.checked_sub(1)?,
            Direction::Down => pos + 1,
        },
    };
    links.get(target).map(|link| link.href.clone())
}

pub fn render_sidebar(
    title: &str,
    sections: Vec<SidebarSection>,
    width: f32,
    theme: ExplorerTheme,
    navigator: &Navigator,
    events: &EventSink,
) -> impl IntoElement {
    let home_events = events.clone();

    div()
        .w(px(width))
        .h_full()
        .flex()
        .flex_col()
        .border_r_1()
        .border_color(rgb(theme.border))
        .bg(rgb(theme.panel))
        .child(
            div()
                .id("sidebar-header")
                .px_3()
                .py_2()
                .border_b_1()
                .border_color(rgb(theme.border))
                .cursor_pointer()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(theme.text_strong))
                .child(title.to_string())
                .on_click(move |_event, _window, _cx| {
                    home_events.send(ExplorerEvent::NavigateHome);
                }),
        )
        .child(
            div()
                .id("sidebar-menu")
                .flex()
                .flex_col()
                .flex_1()
                .overflow_y_scroll()
                .children(sections.into_iter().enumerate().map(|(section_ix, section)| {
                    div()
                        .flex()
                        .flex_col()
                        .child(
                            div()
                                .px_3()
                                .py_2()
                                .text_xs()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(rgb(theme.text_muted))
                                .child(section.title.to_uppercase()),
                        )
                        .children(section.links.into_iter().enumerate().map(
                            move |(link_ix, link)| render_link(section_ix, link_ix, link, theme, navigator),
                        ))
                })),
        )
}

fn render_link(
    section_ix: usize,
    link_ix: usize,
    link: SidebarLink,
    theme: ExplorerTheme,
    navigator: &Navigator,
) -> impl IntoElement {
    let navigator = navigator.clone();
    let href = link.href;

    // Ids are not unique across categories, so key elements by position.
    let base = div()
        .id(ElementId::Name(format!("ui-link-{section_ix}-{link_ix}").into()))
        .mx_1()
        .px_3()
        .py_1()
        .cursor_pointer()
        .text_sm()
        .rounded_sm()
        .child(link.label)
        .on_click(move |_event, _window, _cx| {
            navigator.navigate(href.clone());
        });

    if link.selected {
        base.bg(rgb(theme.accent)).text_color(rgb(theme.text_strong))
    } else {
        base.text_color(rgb(theme.text))
            .hover(|s| s.bg(rgb(theme.hover)))
    }
}
