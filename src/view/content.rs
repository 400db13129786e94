//! Content area: the selected UI's own view plus its description.

use gpui::*;

use crate::catalog::{Catalog, RenderContext, Ui};
use crate::path_codec::Selection;

/// Shown when no UI matches the selection.
pub const PLACEHOLDER_TEXT: &str =
    "\u{201c}Every state of every component, side by side.\u{201d} Pick a UI to get started.";

pub enum ContentView<'a> {
    Placeholder,
    /// `description` is `None` when the UI has no description block.
    Ui {
        ui: &'a Ui,
        description: Option<&'a str>,
    },
}

/// First UI, across all categories, whose id equals the selected UI id.
///
/// The category segment is ignored here; it only matters when building
/// sidebar links. Duplicate ids therefore resolve to the first in catalog
/// order.
pub fn resolve_content<'a>(catalog: &'a Catalog, selection: &Selection) -> ContentView<'a> {
    let Some(selected) = selection.ui() else {
        return ContentView::Placeholder;
    };
    catalog
        .uis()
        .find(|ui| ui.id() == selected)
        .map_or(ContentView::Placeholder, |ui| ContentView::Ui {
            ui,
            description: Some(ui.description()).filter(|d| !d.is_empty()),
        })
}

pub fn render_content(catalog: &Catalog, cx: &RenderContext) -> AnyElement {
    let theme = cx.theme;
    match resolve_content(catalog, &cx.selection) {
        ContentView::Placeholder => div()
            .flex()
            .items_center()
            .justify_center()
            .size_full()
            .px_8()
            .text_color(rgb(theme.text_dim))
            .child(PLACEHOLDER_TEXT)
            .into_any_element(),
        ContentView::Ui { ui, description } => {
            let container = div().flex().flex_col().w_full().child(ui.render(cx));
            let Some(description) = description else {
                return container.into_any_element();
            };
            container
                .child(
                    div()
                        .mx_4()
                        .mb_4()
                        .p_3()
                        .rounded_md()
                        .bg(rgb(theme.surface))
                        .text_sm()
                        .text_color(rgb(theme.text))
                        .child(description.to_string()),
                )
                .into_any_element()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;
    use crate::catalog::{
        add_category, catalog_from_ui_list, empty_catalog, make_ui, make_ui_with_description,
    };
    use crate::path_codec::{decode, Location};

    fn ui(id: &str, description: &str) -> Ui {
        make_ui_with_description(id, description, |_| div().into_any_element())
    }

    fn resolved_description(catalog: &Catalog, raw: &str) -> Option<String> {
        match resolve_content(catalog, &decode(&Location::new(raw))) {
            ContentView::Placeholder => None,
            ContentView::Ui { ui, .. } => Some(ui.description().to_string()),
        }
    }

    fn description_block<'a>(catalog: &'a Catalog, raw: &str) -> Option<Option<&'a str>> {
        match resolve_content(catalog, &decode(&Location::new(raw))) {
            ContentView::Placeholder => None,
            ContentView::Ui { description, .. } => Some(description),
        }
    }

    #[test]
    fn test_no_selection_shows_placeholder() {
        let catalog = catalog_from_ui_list(vec![ui("Button", "")]);
        assert_eq!(resolved_description(&catalog, ""), None);
        assert_eq!(resolved_description(&catalog, "#Default"), None);
    }

    #[test]
    fn test_unmatched_ui_shows_placeholder() {
        let catalog = catalog_from_ui_list(vec![ui("Button", "")]);
        assert_eq!(resolved_description(&catalog, "#Default/Missing"), None);
        assert_eq!(resolved_description(&catalog, "#Default/"), None);
    }

    #[test]
    fn test_matching_ui_is_resolved() {
        let catalog = catalog_from_ui_list(vec![ui("Badge", "badge"), ui("Button", "button")]);
        assert_eq!(
            resolved_description(&catalog, "#Default/Button/Loading").as_deref(),
            Some("button")
        );
    }

    #[test]
    fn test_lookup_ignores_category() {
        let catalog = add_category("Atoms", vec![ui("Button", "atom")], empty_catalog());
        let catalog = add_category("Molecules", vec![ui("Button", "molecule")], catalog);
        assert_eq!(
            resolved_description(&catalog, "#Molecules/Button").as_deref(),
            Some("atom")
        );
        assert_eq!(
            resolved_description(&catalog, "#Nowhere/Button").as_deref(),
            Some("atom")
        );
    }

    #[test]
    fn test_description_block_only_for_described_uis() {
        let plain = make_ui("Badge", |_| div().into_any_element());
        let catalog = catalog_from_ui_list(vec![plain, ui("Button", "Primary action")]);
        assert_eq!(
            description_block(&catalog, "#Default/Button"),
            Some(Some("Primary action"))
        );
        assert_eq!(description_block(&catalog, "#Default/Badge"), Some(None));
        assert_eq!(description_block(&catalog, "#Default/Missing"), None);
    }
}
