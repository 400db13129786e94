//! UI Explorer - a GPUI component catalog browser
//!
//! Register UI components grouped into categories, give each a set of named
//! stories, and browse them through a sidebar driven by an addressable
//! location of the form `#<category>/<ui>/<story>`.
//!
//! ```ignore
//! use ui_explorer::{add_category, empty_catalog, make_ui, render_stories};
//!
//! let button = make_ui("Button", render_stories(
//!     |label: &&str| div().child(*label).into_any_element(),
//!     vec![("Loading", "Loading..."), ("Loaded", "Save")],
//! ));
//! ui_explorer::run(add_category("Atoms", vec![button], empty_catalog()));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod explorer;
pub mod external_commands;
pub mod layout;
pub mod location;
pub mod logging;
pub mod navigation;
pub mod path_codec;
pub mod story_switcher;
pub mod theme;
pub mod view;

pub use catalog::{
    add_category, catalog_from_ui_list, empty_catalog, make_ui, make_ui_with_description,
    Catalog, Category, RenderContext, Ui,
};
pub use explorer::{run, run_with_config, ExplorerView};
pub use path_codec::{decode, encode, Location, Selection};
pub use story_switcher::render_stories;
