//! Location service
//!
//! Stands in for the browser address bar: it owns a back/forward history,
//! accepts [`LocationCommand`]s and answers every accepted command with a
//! single `LocationChanged` event. The explorer treats it as an external
//! subsystem and only talks to it through the two channels.

use tracing::{debug, info};

use crate::navigation::{EventSink, ExplorerEvent, NavCommand};
use crate::path_codec::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationCommand {
    NavigateTo(Location),
    Back,
    Forward,
}

impl From<NavCommand> for LocationCommand {
    fn from(command: NavCommand) -> Self {
        match command {
            NavCommand::NavigateTo(location) => LocationCommand::NavigateTo(location),
        }
    }
}

/// Browser-style history: a list of entries and a cursor into it.
#[derive(Debug, Clone)]
pub struct LocationHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl LocationHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Push a new entry, discarding anything ahead of the cursor.
    pub fn push(&mut self, location: Location) -> &Location {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
        self.current()
    }

    pub fn back(&mut self) -> Option<&Location> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Apply a command, returning the location it lands on if accepted.
    pub fn apply(&mut self, command: LocationCommand) -> Option<Location> {
        match command {
            LocationCommand::NavigateTo(location) => Some(self.push(location).clone()),
            LocationCommand::Back => self.back().cloned(),
            LocationCommand::Forward => self.forward().cloned(),
        }
    }
}

/// Sender half of the command channel. Cloned into sidebar links and
/// keyboard handlers.
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: async_channel::Sender<LocationCommand>,
}

impl Navigator {
    pub fn channel() -> (Self, async_channel::Receiver<LocationCommand>) {
        let (tx, rx) = async_channel::unbounded();
        (Self { tx }, rx)
    }

    /// Fire-and-forget; the service may drop the request.
    pub fn send(&self, command: LocationCommand) {
        if let Err(e) = self.tx.try_send(command) {
            tracing::warn!(error = %e, "Location command channel closed, dropping command");
        }
    }

    pub fn navigate(&self, location: Location) {
        self.send(LocationCommand::NavigateTo(location));
    }

    pub fn back(&self) {
        self.send(LocationCommand::Back);
    }

    pub fn forward(&self) {
        self.send(LocationCommand::Forward);
    }
}

/// Receives commands and publishes location changes.
pub struct LocationService {
    history: LocationHistory,
    events: EventSink,
}

impl LocationService {
    pub fn new(initial: Location, events: EventSink) -> Self {
        Self {
            history: LocationHistory::new(initial),
            events,
        }
    }

    pub fn handle(&mut self, command: LocationCommand) {
        debug!(command = ?command, "Location command received");
        match self.history.apply(command) {
            Some(location) => {
                info!(
                    event_type = "location_changed",
                    location = %location,
                    "Location changed"
                );
                self.events.send(ExplorerEvent::LocationChanged(location));
            }
            None => debug!("Location command had nowhere to go, ignoring"),
        }
    }

    /// Drain commands until every [`Navigator`] is dropped.
    pub async fn run(mut self, commands: async_channel::Receiver<LocationCommand>) {
        info!("Location service started");
        while let Ok(command) = commands.recv().await {
            self.handle(command);
        }
        info!("Location service exiting (channel closed)");
    }
}
