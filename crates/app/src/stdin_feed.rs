//! Newline-delimited settings feed on stdin.
//!
//! Each non-blank line is one JSON `SceneSettings` payload, pushed untouched
//! into the `ConfigInbox`; parsing and validation happen on the main schedule.

use std::io::BufRead;

use bevy::log::{info, warn};
use simulation::config_stream::ConfigInbox;

pub fn spawn(inbox: ConfigInbox) {
    let spawned = std::thread::Builder::new()
        .name("stdin-feed".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            let count = forward_lines(stdin.lock(), &inbox);
            info!("Stdin settings feed closed after {} payload(s)", count);
        });
    if let Err(e) = spawned {
        warn!("Could not start stdin settings feed: {}", e);
    }
}

/// Push every non-blank line into `inbox` until EOF or a read error,
/// marking the inbox connected meanwhile. Returns the number of payloads
/// forwarded.
pub fn forward_lines(reader: impl BufRead, inbox: &ConfigInbox) -> usize {
    inbox.set_connected(true);
    let mut count = 0;
    for line in reader.lines() {
        match line {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => {
                inbox.push(line);
                count += 1;
            }
            Err(e) => {
                warn!("Stdin settings feed read error: {}", e);
                break;
            }
        }
    }
    inbox.set_connected(false);
    count
}
