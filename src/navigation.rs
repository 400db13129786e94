//! Navigation controller
//!
//! The explorer's one piece of mutable state is [`ExplorerState`]. It only
//! changes in response to [`ExplorerEvent`]s, processed one at a time in
//! arrival order. Clicks never update the selection directly: they produce a
//! [`NavCommand`] for the location service, and the selection catches up when
//! the resulting `LocationChanged` event comes back.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::path_codec::{decode, encode, Location, Selection};

/// Inbound events, delivered strictly sequentially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    /// The location service accepted a navigation.
    LocationChanged(Location),
    /// A story tab was clicked inside the current UI.
    StorySelected(String),
    /// The header was clicked.
    NavigateHome,
}

/// Outbound, fire-and-forget request to the location service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    NavigateTo(Location),
}

/// Selection state: the current location, its projection, and every
/// location seen so far (most recent first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    location: Location,
    selection: Selection,
    history: VecDeque<Location>,
}

impl ExplorerState {
    pub fn new(initial: Location) -> Self {
        let selection = decode(&initial);
        let mut history = VecDeque::new();
        history.push_front(initial.clone());
        Self {
            location: initial,
            selection,
            history,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Past locations, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Location> {
        self.history.iter()
    }

    /// Pure transition function.
    pub fn update(self, event: ExplorerEvent) -> (Self, Option<NavCommand>) {
        match event {
            ExplorerEvent::LocationChanged(location) => {
                let mut history = self.history;
                history.push_front(location.clone());
                let next = Self {
                    selection: decode(&location),
                    location,
                    history,
                };
                (next, None)
            }
            ExplorerEvent::StorySelected(story) => {
                let command = encode(
                    self.selection.category(),
                    self.selection.ui(),
                    Some(&story),
                )
                .map(NavCommand::NavigateTo);
                (self, command)
            }
            ExplorerEvent::NavigateHome => (self, Some(NavCommand::NavigateTo(Location::root()))),
        }
    }
}

/// Sole owner of the live [`ExplorerState`].
#[derive(Debug, Default)]
pub struct NavigationController {
    state: ExplorerState,
}

impl NavigationController {
    pub fn new(initial: Location) -> Self {
        Self {
            state: ExplorerState::new(initial),
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    /// Apply one event and return the navigation command it issues, if any.
    pub fn handle(&mut self, event: ExplorerEvent) -> Option<NavCommand> {
        debug!(
            event_type = "navigation",
            event = ?event,
            location = %self.state.location(),
            "Handling explorer event"
        );

        let is_story_selection = matches!(event, ExplorerEvent::StorySelected(_));
        let (next, command) = std::mem::take(&mut self.state).update(event);
        self.state = next;

        if is_story_selection && command.is_none() {
            warn!(
                event_type = "navigation",
                location = %self.state.location(),
                "Story selected without a category and UI, ignoring"
            );
        }
        command
    }
}

/// Cloneable sender half of the event channel, handed to widgets so they can
/// report clicks without touching the state.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: async_channel::Sender<ExplorerEvent>,
}

impl EventSink {
    pub fn new(tx: async_channel::Sender<ExplorerEvent>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiver the controller drains.
    pub fn channel() -> (Self, async_channel::Receiver<ExplorerEvent>) {
        let (tx, rx) = async_channel::unbounded();
        (Self::new(tx), rx)
    }

    /// Fire-and-forget. A closed channel means the explorer is shutting down.
    pub fn send(&self, event: ExplorerEvent) {
        if let Err(e) = self.tx.try_send(event) {
            warn!(error = %e, "Explorer event channel closed, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(raw: &str) -> Location {
        Location::new(raw)
    }

    #[test]
    fn test_new_state_projects_initial_location() {
        let state = ExplorerState::new(loc("#cats/btn/Loading"));
        assert_eq!(state.selection().category(), Some("cats"));
        assert_eq!(state.selection().ui(), Some("btn"));
        assert_eq!(state.selection().story(), Some("Loading"));
        assert_eq!(state.history().collect::<Vec<_>>(), vec![&loc("#cats/btn/Loading")]);
    }

    #[test]
    fn test_location_changed_updates_selection_and_history() {
        let state = ExplorerState::new(loc(""));
        let (state, command) = state.update(ExplorerEvent::LocationChanged(loc("#cats/btn")));
        assert!(command.is_none());
        assert_eq!(state.location(), &loc("#cats/btn"));
        assert_eq!(state.selection().ui(), Some("btn"));
        assert_eq!(state.selection().story(), None);

        let (state, _) = state.update(ExplorerEvent::LocationChanged(loc("#cats/btn/Loaded")));
        assert_eq!(
            state.history().collect::<Vec<_>>(),
            vec![&loc("#cats/btn/Loaded"), &loc("#cats/btn"), &loc("")]
        );
    }

    #[test]
    fn test_story_selected_issues_command_without_changing_selection() {
        let state = ExplorerState::new(loc("#cats/btn"));
        let before = state.clone();
        let (state, command) = state.update(ExplorerEvent::StorySelected("Loaded".into()));
        assert_eq!(
            command,
            Some(NavCommand::NavigateTo(loc("#cats/btn/Loaded")))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_story_selected_replaces_current_story() {
        let state = ExplorerState::new(loc("#cats/btn/Loading"));
        let (_, command) = state.update(ExplorerEvent::StorySelected("Loaded".into()));
        assert_eq!(
            command,
            Some(NavCommand::NavigateTo(loc("#cats/btn/Loaded")))
        );
    }

    #[test]
    fn test_story_selected_without_ui_is_noop() {
        for raw in ["", "#", "#cats"] {
            let state = ExplorerState::new(loc(raw));
            let before = state.clone();
            let (state, command) = state.update(ExplorerEvent::StorySelected("Loaded".into()));
            assert!(command.is_none(), "location {raw:?} should not navigate");
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_navigate_home_targets_root_without_mutation() {
        let state = ExplorerState::new(loc("#cats/btn/Loading"));
        let before = state.clone();
        let (state, command) = state.update(ExplorerEvent::NavigateHome);
        assert_eq!(command, Some(NavCommand::NavigateTo(Location::root())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_controller_round_trip_through_location_change() {
        let mut controller = NavigationController::new(loc("#cats/btn"));
        let command = controller.handle(ExplorerEvent::StorySelected("Loaded".into()));
        assert_eq!(controller.selection().story(), None);

        let Some(NavCommand::NavigateTo(target)) = command else {
            panic!("expected a navigation command");
        };
        controller.handle(ExplorerEvent::LocationChanged(target));
        assert_eq!(controller.selection().story(), Some("Loaded"));
        assert_eq!(controller.state().history().count(), 2);
    }

    #[test]
    fn test_event_sink_delivers_in_order() {
        let (sink, rx) = EventSink::channel();
        sink.send(ExplorerEvent::NavigateHome);
        sink.send(ExplorerEvent::StorySelected("a".into()));
        assert_eq!(rx.try_recv().unwrap(), ExplorerEvent::NavigateHome);
        assert_eq!(
            rx.try_recv().unwrap(),
            ExplorerEvent::StorySelected("a".into())
        );
    }

    #[test]
    fn test_event_sink_survives_closed_channel() {
        let (sink, rx) = EventSink::channel();
        drop(rx);
        sink.send(ExplorerEvent::NavigateHome);
    }
}
