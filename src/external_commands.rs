//! External command handling via stdin.
//!
//! Drives the explorer from scripts and tests, one JSON object per line:
//!
//! ```json
//! {"type": "navigate", "location": "#Atoms/Button/Loading"}
//! {"type": "back"}
//! {"type": "forward"}
//! {"type": "home"}
//! {"type": "selectStory", "id": "Loaded"}
//! ```
//!
//! ```bash
//! echo '{"type": "navigate", "location": "#Atoms/Button"}' | ui-explorer --stdin
//! ```
//!
//! `navigate`, `back` and `forward` act like typing in the address bar and go
//! to the location service. `home` and `selectStory` act like clicks and go to
//! the navigation controller.

use tracing::{debug, info, warn};

use crate::location::{LocationCommand, Navigator};
use crate::navigation::{EventSink, ExplorerEvent};
use crate::path_codec::Location;

/// Commands accepted on stdin. Every command may carry a `requestId` that is
/// echoed in the logs for correlation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExternalCommand {
    Navigate {
        location: String,
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    Back {
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    Forward {
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    Home {
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
    SelectStory {
        id: String,
        #[serde(default, rename = "requestId")]
        request_id: Option<String>,
    },
}

/// Where a command ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRoute {
    Location(LocationCommand),
    Explorer(ExplorerEvent),
}

impl ExternalCommand {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Navigate { request_id, .. }
            | Self::Back { request_id }
            | Self::Forward { request_id }
            | Self::Home { request_id }
            | Self::SelectStory { request_id, .. } => request_id.as_deref(),
        }
    }

    pub fn route(self) -> CommandRoute {
        match self {
            Self::Navigate { location, .. } => {
                CommandRoute::Location(LocationCommand::NavigateTo(Location::new(location)))
            }
            Self::Back { .. } => CommandRoute::Location(LocationCommand::Back),
            Self::Forward { .. } => CommandRoute::Location(LocationCommand::Forward),
            Self::Home { .. } => CommandRoute::Explorer(ExplorerEvent::NavigateHome),
            Self::SelectStory { id, .. } => CommandRoute::Explorer(ExplorerEvent::StorySelected(id)),
        }
    }

    /// Send the command down the channel it belongs to.
    pub fn dispatch(self, navigator: &Navigator, events: &EventSink) {
        let request_id = self.request_id().map(str::to_string);
        let route = self.route();
        info!(request_id = ?request_id, route = ?route, "Dispatching external command");
        match route {
            CommandRoute::Location(command) => navigator.send(command),
            CommandRoute::Explorer(event) => events.send(event),
        }
    }
}

/// Parse one stdin line. Blank lines yield `None`.
pub fn parse_command_line(line: &str) -> Option<Result<ExternalCommand, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Start a thread that reads stdin line by line.
/// Returns a receiver that can be awaited on the UI thread.
///
/// Uses a bounded channel; commands arrive far slower than 100 at a time.
/// The thread exits when stdin closes or the receiver is dropped.
pub fn start_stdin_listener() -> async_channel::Receiver<ExternalCommand> {
    use std::io::BufRead;

    let (tx, rx) = async_channel::bounded(100);

    std::thread::spawn(move || {
        info!("External command listener started");
        let stdin = std::io::stdin();
        let reader = stdin.lock();

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Error reading stdin");
                    break;
                }
            };
            match parse_command_line(&line) {
                Some(Ok(cmd)) => {
                    debug!(command = ?cmd, "Parsed external command");
                    if tx.send_blocking(cmd).is_err() {
                        info!("Command channel closed, exiting");
                        break;
                    }
                }
                Some(Err(e)) => warn!(error = %e, line = %line, "Failed to parse command"),
                None => {}
            }
        }
        info!("External command listener exiting");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ExternalCommand {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_navigate_deserialization() {
        let cmd = parse(r##"{"type": "navigate", "location": "#Atoms/Button"}"##);
        assert_eq!(
            cmd,
            ExternalCommand::Navigate {
                location: "#Atoms/Button".to_string(),
                request_id: None,
            }
        );
    }

    #[test]
    fn test_request_id_is_optional_and_kept() {
        let cmd = parse(r#"{"type": "home", "requestId": "req-1"}"#);
        assert_eq!(cmd.request_id(), Some("req-1"));
        let cmd = parse(r#"{"type": "back"}"#);
        assert_eq!(cmd.request_id(), None);
    }

    #[test]
    fn test_select_story_deserialization() {
        let cmd = parse(r#"{"type": "selectStory", "id": "Loaded"}"#);
        assert_eq!(
            cmd.route(),
            CommandRoute::Explorer(ExplorerEvent::StorySelected("Loaded".into()))
        );
    }

    #[test]
    fn test_unknown_or_incomplete_commands_fail() {
        assert!(serde_json::from_str::<ExternalCommand>(r#"{"type": "unknown"}"#).is_err());
        assert!(serde_json::from_str::<ExternalCommand>(r#"{"type": "navigate"}"#).is_err());
    }

    #[test]
    fn test_parse_command_line_skips_blank_lines() {
        assert!(parse_command_line("   ").is_none());
        assert!(matches!(
            parse_command_line(r#" {"type": "forward"} "#),
            Some(Ok(ExternalCommand::Forward { .. }))
        ));
        assert!(matches!(parse_command_line("nope"), Some(Err(_))));
    }

    #[test]
    fn test_address_bar_commands_route_to_location_service() {
        assert_eq!(
            parse(r##"{"type": "navigate", "location": "#a/b"}"##).route(),
            CommandRoute::Location(LocationCommand::NavigateTo(Location::new("#a/b")))
        );
        assert_eq!(
            parse(r#"{"type": "back"}"#).route(),
            CommandRoute::Location(LocationCommand::Back)
        );
        assert_eq!(
            parse(r#"{"type": "forward"}"#).route(),
            CommandRoute::Location(LocationCommand::Forward)
        );
    }

    #[test]
    fn test_dispatch_uses_matching_channel() {
        let (navigator, commands) = Navigator::channel();
        let (events, inbound) = EventSink::channel();

        parse(r#"{"type": "home"}"#).dispatch(&navigator, &events);
        parse(r#"{"type": "back"}"#).dispatch(&navigator, &events);

        assert_eq!(inbound.try_recv().unwrap(), ExplorerEvent::NavigateHome);
        assert_eq!(commands.try_recv().unwrap(), LocationCommand::Back);
        assert!(inbound.try_recv().is_err());
        assert!(commands.try_recv().is_err());
    }
}
