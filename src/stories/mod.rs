//! Demo catalog shown by the `ui-explorer` binary.
//!
//! Each file builds one or more UI entries from plain GPUI elements; the
//! explorer itself never looks inside them.

mod badge_stories;
mod button_stories;
mod color_stories;
mod toast_stories;

use ui_explorer::theme::ExplorerTheme;
use ui_explorer::{add_category, empty_catalog, Catalog};

pub fn demo_catalog(theme: ExplorerTheme) -> Catalog {
    let catalog = add_category(
        "Foundations",
        vec![color_stories::colors_ui(theme), color_stories::icons_ui()],
        empty_catalog(),
    );
    let catalog = add_category(
        "Atoms",
        vec![button_stories::button_ui(theme), badge_stories::badge_ui(theme)],
        catalog,
    );
    add_category("Feedback", vec![toast_stories::toast_ui(theme)], catalog)
}
