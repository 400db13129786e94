//! ExplorerView - the explorer window
//!
//! Owns the navigation controller and wires it to the location service:
//!
//! ```text
//! location service --LocationChanged--> ExplorerView (controller) --render--> sidebar/content
//!        ^                                     |
//!        +----------- LocationCommand ---------+  (story tabs, home, keyboard)
//!        +----------- sidebar link clicks
//! ```
//!
//! Both directions are channels; nothing calls across synchronously.

use gpui::*;

use crate::catalog::{Catalog, RenderContext};
use crate::config::{load_config, Config};
use crate::error::{ExplorerError, ResultExt};
use crate::external_commands::start_stdin_listener;
use crate::location::{LocationService, Navigator};
use crate::logging;
use crate::navigation::{EventSink, ExplorerEvent, NavCommand, NavigationController};
use crate::path_codec::Location;
use crate::view::{adjacent_link, render_content, render_sidebar, sidebar_sections, Direction};

pub struct ExplorerView {
    catalog: Catalog,
    config: Config,
    controller: NavigationController,
    events: EventSink,
    navigator: Navigator,
    focus_handle: FocusHandle,
}

impl ExplorerView {
    pub fn new(catalog: Catalog, config: Config, cx: &mut Context<Self>) -> Self {
        let initial = config
            .initial_location
            .clone()
            .map(Location::new)
            .unwrap_or_else(Location::root);

        let (events, event_rx) = EventSink::channel();
        let (navigator, command_rx) = Navigator::channel();

        let service = LocationService::new(initial.clone(), events.clone());
        cx.spawn(async move |_this, _cx| service.run(command_rx).await)
            .detach();

        // Event-driven: recv().await yields until the next event arrives
        cx.spawn(async move |this, cx| {
            while let Ok(event) = event_rx.recv().await {
                let _ = cx.update(|cx| {
                    this.update(cx, |view, cx| {
                        view.handle_event(event, cx);
                    })
                });
            }
            tracing::info!("Explorer event listener exiting (channel closed)");
        })
        .detach();

        if config.stdin_commands {
            let commands = start_stdin_listener();
            let navigator = navigator.clone();
            let events = events.clone();
            cx.spawn(async move |_this, _cx| {
                while let Ok(command) = commands.recv().await {
                    command.dispatch(&navigator, &events);
                }
            })
            .detach();
        }

        logging::log_navigation("initial_location", initial.as_str());

        Self {
            catalog,
            config,
            controller: NavigationController::new(initial),
            events,
            navigator,
            focus_handle: cx.focus_handle(),
        }
    }

    fn handle_event(&mut self, event: ExplorerEvent, cx: &mut Context<Self>) {
        if let ExplorerEvent::LocationChanged(location) = &event {
            logging::log_navigation("location_changed", location.as_str());
        }

        if let Some(command) = self.controller.handle(event) {
            match &command {
                NavCommand::NavigateTo(target) => {
                    logging::log_navigation("navigate_to", target.as_str())
                }
            }
            self.navigator.send(command.into());
        }
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent) {
        let key = event.keystroke.key.as_str();
        let alt = event.keystroke.modifiers.alt;

        match (key, alt) {
            ("up" | "arrowup", false) => self.step(Direction::Up),
            ("down" | "arrowdown", false) => self.step(Direction::Down),
            ("left" | "arrowleft", true) => self.navigator.back(),
            ("right" | "arrowright", true) => self.navigator.forward(),
            ("escape", _) => self.events.send(ExplorerEvent::NavigateHome),
            _ => return,
        }
        logging::log_ui_event("explorer", "key", Some(key));
    }

    fn step(&self, direction: Direction) {
        let selection = self.controller.selection();
        let sections = sidebar_sections(&self.catalog, selection);
        if let Some(target) = adjacent_link(&sections, selection, direction) {
            self.navigator.navigate(target);
        }
    }

    fn render_toolbar(&self) -> impl IntoElement {
        let theme = self.config.theme;
        let selection = self.controller.selection();
        let heading = selection.ui().unwrap_or("Nothing selected").to_string();
        let category = selection
            .category()
            .map(|c| format!("({})", c))
            .unwrap_or_default();

        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(rgb(theme.border))
            .bg(rgb(theme.panel))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_base()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(theme.text_strong))
                            .child(heading),
                    )
                    .child(div().text_xs().text_color(rgb(theme.text_dim)).child(category)),
            )
            .child(
                // Address bar
                div()
                    .px_2()
                    .py_1()
                    .text_xs()
                    .font_family("Menlo")
                    .text_color(rgb(theme.text))
                    .bg(rgb(theme.surface))
                    .rounded_sm()
                    .child(self.controller.state().location().to_string()),
            )
    }
}

impl Render for ExplorerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.config.theme;
        let selection = self.controller.selection().clone();
        let sections = sidebar_sections(&self.catalog, &selection);
        let render_cx = RenderContext::new(selection, theme, self.events.clone());
        let content = render_content(&self.catalog, &render_cx);

        div()
            .id("ui-explorer")
            .key_context("UiExplorer")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, _cx| {
                this.handle_key(event);
            }))
            .flex()
            .flex_row()
            .size_full()
            .bg(rgb(theme.background))
            .text_color(rgb(theme.text))
            .child(render_sidebar(
                &self.config.title,
                sections,
                self.config.sidebar_width,
                theme,
                &self.navigator,
                &self.events,
            ))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(self.render_toolbar())
                    .child(
                        div()
                            .id("explorer-content")
                            .flex_1()
                            .overflow_y_scroll()
                            .child(content),
                    ),
            )
    }
}

impl Focusable for ExplorerView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

/// Start the explorer with the user's config file.
pub fn run(catalog: Catalog) {
    run_with_config(catalog, load_config());
}

/// Start the explorer. Blocks until the application quits.
pub fn run_with_config(catalog: Catalog, config: Config) {
    if catalog.has_no_uis() {
        tracing::warn!(
            categories = catalog.categories().len(),
            "Catalog has no UIs, only the placeholder will be shown"
        );
    }
    Application::new().run(move |cx: &mut App| {
        let window_size = size(px(config.window.width), px(config.window.height));
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(config.title.clone().into()),
                appears_transparent: false,
                ..Default::default()
            }),
            window_min_size: Some(size(
                px(config.window.min_width),
                px(config.window.min_height),
            )),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| ExplorerView::new(catalog, config, cx));
            let focus_handle = view.read(cx).focus_handle.clone();
            focus_handle.focus(window);
            view
        });

        if opened
            .map_err(|e| ExplorerError::Window(e.to_string()))
            .log_err()
            .is_none()
        {
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
