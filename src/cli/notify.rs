//! Rendering of client notifications
//!
//! The API client only publishes events; this is the shell side that turns
//! them into terminal output once a command finishes.

use colored::Colorize;

use crate::client::ClientEvent;

/// Turn one event into the line shown on stderr
pub fn render(event: &ClientEvent) -> Option<String> {
    match event {
        ClientEvent::Error(message) => Some(format!("{} {}", "✗".red(), message)),
        ClientEvent::SessionInvalidated {
            redirect: Some(target),
        } => Some(format!(
            "{} Your session has expired. Run `medtrack login <EMAIL>` to sign in again.\n  → {}",
            "⚠".yellow(),
            target
        )),
        ClientEvent::SessionInvalidated { redirect: None } => None,
    }
}

/// Print every event to stderr, in publish order
pub fn show(events: &[ClientEvent]) {
    for line in events.iter().filter_map(render) {
        eprintln!("{}", line);
    }
}
