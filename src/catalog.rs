//! Catalog model
//!
//! A catalog is an ordered list of categories, each an ordered list of UI
//! entries. It is assembled once at startup with the pure builders below and
//! never changes afterwards.
//!
//! ```ignore
//! let catalog = add_category("Atoms", vec![button_ui()], empty_catalog());
//! let catalog = add_category("Molecules", vec![form_ui()], catalog);
//! ui_explorer::run(catalog);
//! ```

use std::fmt;
use std::rc::Rc;

use gpui::AnyElement;

use crate::navigation::{EventSink, ExplorerEvent};
use crate::path_codec::{encode, Location, Selection};
use crate::theme::ExplorerTheme;

/// Title given to the single category built by [`catalog_from_ui_list`].
pub const DEFAULT_CATEGORY_TITLE: &str = "Default";

/// What a UI's render function gets to see.
#[derive(Clone)]
pub struct RenderContext {
    pub selection: Selection,
    pub theme: ExplorerTheme,
    events: EventSink,
}

impl RenderContext {
    pub fn new(selection: Selection, theme: ExplorerTheme, events: EventSink) -> Self {
        Self {
            selection,
            theme,
            events,
        }
    }

    /// Ask the explorer to switch to another story of the current UI.
    pub fn select_story(&self, story_id: impl Into<String>) {
        self.events
            .send(ExplorerEvent::StorySelected(story_id.into()));
    }
}

/// Type-erased view of a UI. Owns whatever story payloads it closes over.
pub type RenderFn = Rc<dyn Fn(&RenderContext) -> AnyElement>;

#[derive(Clone)]
pub struct Ui {
    id: String,
    description: String,
    render: RenderFn,
}

impl Ui {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn render(&self, cx: &RenderContext) -> AnyElement {
        (self.render)(cx)
    }
}

impl fmt::Debug for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ui")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    title: String,
    uis: Vec<Ui>,
}

impl Category {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn uis(&self) -> &[Ui] {
        &self.uis
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every UI in catalog order, ignoring category boundaries.
    pub fn uis(&self) -> impl Iterator<Item = &Ui> {
        self.categories.iter().flat_map(|category| category.uis.iter())
    }

    /// True when no category holds a UI, including a catalog with only
    /// empty categories.
    pub fn has_no_uis(&self) -> bool {
        self.categories.iter().all(|category| category.uis.is_empty())
    }

    /// The location of every UI, in sidebar order.
    pub fn ui_locations(&self) -> Vec<Location> {
        self.categories
            .iter()
            .flat_map(|category| {
                category
                    .uis
                    .iter()
                    .filter_map(move |ui| encode(Some(category.title()), Some(ui.id()), None))
            })
            .collect()
    }
}

pub fn empty_catalog() -> Catalog {
    Catalog::default()
}

pub fn make_ui<F>(id: impl Into<String>, render: F) -> Ui
where
    F: Fn(&RenderContext) -> AnyElement + 'static,
{
    make_ui_with_description(id, "", render)
}

pub fn make_ui_with_description<F>(
    id: impl Into<String>,
    description: impl Into<String>,
    render: F,
) -> Ui
where
    F: Fn(&RenderContext) -> AnyElement + 'static,
{
    Ui {
        id: id.into(),
        description: description.into(),
        render: Rc::new(render),
    }
}

pub fn catalog_from_ui_list(uis: Vec<Ui>) -> Catalog {
    add_category(DEFAULT_CATEGORY_TITLE, uis, empty_catalog())
}

/// Append a category. Titles and UI ids are not deduplicated.
pub fn add_category(title: impl Into<String>, uis: Vec<Ui>, catalog: Catalog) -> Catalog {
    let mut categories = catalog.categories;
    categories.push(Category {
        title: title.into(),
        uis,
    });
    Catalog { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, IntoElement};

    fn ui(id: &str) -> Ui {
        make_ui(id, |_| div().into_any_element())
    }

    fn titles(catalog: &Catalog) -> Vec<&str> {
        catalog.categories().iter().map(Category::title).collect()
    }

    #[test]
    fn test_empty_catalog_has_no_categories() {
        let catalog = empty_catalog();
        assert!(catalog.categories().is_empty());
        assert!(catalog.has_no_uis());
    }

    #[test]
    fn test_catalog_with_only_empty_categories_has_no_uis() {
        let catalog = add_category("Atoms", Vec::new(), empty_catalog());
        assert_eq!(catalog.categories().len(), 1);
        assert!(catalog.has_no_uis());
        let catalog = add_category("Molecules", vec![ui("Form")], catalog);
        assert!(!catalog.has_no_uis());
    }

    #[test]
    fn test_add_category_preserves_order() {
        let catalog = add_category("Atoms", vec![ui("A")], empty_catalog());
        let catalog = add_category("Molecules", vec![ui("B")], catalog);
        assert_eq!(titles(&catalog), vec!["Atoms", "Molecules"]);
        assert_eq!(catalog.categories()[1].uis()[0].id(), "B");
    }

    #[test]
    fn test_add_category_allows_duplicates() {
        let catalog = add_category("Atoms", vec![ui("A"), ui("A")], empty_catalog());
        let catalog = add_category("Atoms", vec![ui("A")], catalog);
        assert_eq!(titles(&catalog), vec!["Atoms", "Atoms"]);
        assert_eq!(catalog.uis().count(), 3);
    }

    #[test]
    fn test_catalog_from_ui_list_uses_default_category() {
        let catalog = catalog_from_ui_list(vec![ui("A"), ui("B")]);
        assert_eq!(titles(&catalog), vec![DEFAULT_CATEGORY_TITLE]);
        let ids: Vec<_> = catalog.uis().map(Ui::id).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_make_ui_description_defaults_to_empty() {
        assert_eq!(ui("A").description(), "");
        let described = make_ui_with_description("A", "Primary action", |_| {
            div().into_any_element()
        });
        assert_eq!(described.description(), "Primary action");
    }

    #[test]
    fn test_ui_locations_follow_sidebar_order() {
        let catalog = add_category("Atoms", vec![ui("Button"), ui("Badge")], empty_catalog());
        let catalog = add_category("Molecules", vec![ui("Form")], catalog);
        assert_eq!(
            catalog.ui_locations(),
            vec![
                Location::new("#Atoms/Button"),
                Location::new("#Atoms/Badge"),
                Location::new("#Molecules/Form"),
            ]
        );
    }

    #[test]
    fn test_select_story_emits_event() {
        let (sink, rx) = EventSink::channel();
        let cx = RenderContext::new(Selection::default(), ExplorerTheme::default(), sink);
        cx.select_story("Loaded");
        assert_eq!(
            rx.try_recv().unwrap(),
            ExplorerEvent::StorySelected("Loaded".into())
        );
    }
}
