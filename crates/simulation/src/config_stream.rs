//! Config stream adapter: raw streamed text in, whole `SceneSettings` out.
//!
//! Transports push raw payloads into the shared `ConfigInbox` from any
//! thread. Once per frame `drain_config_inbox` parses them in arrival order.
//! An accepted payload replaces the active settings wholesale and requests a
//! rebuild; a refused one is logged and reported, and changes nothing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;

use crate::scene_state::{ActiveSettings, RebuildRequested, SettingsRejected, SettingsSource};
use crate::settings::SceneSettings;
use crate::settings_error::SettingsParseError;

/// Parse and validate one streamed payload.
pub fn parse_settings(raw: &str) -> Result<SceneSettings, SettingsParseError> {
    let settings: SceneSettings = serde_json::from_str(raw)?;
    settings.validate()?;
    Ok(settings)
}

/// Shared FIFO bridging transport threads to the ECS world. A lock poisoned
/// by a panicking transport is recovered; queued payloads are kept.
#[derive(Resource, Default, Clone)]
pub struct ConfigInbox {
    queue: Arc<Mutex<VecDeque<String>>>,
    connected: Arc<AtomicBool>,
}

impl ConfigInbox {
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, raw: impl Into<String>) {
        self.lock().push_back(raw.into());
    }

    /// Take every queued payload, oldest first.
    pub fn take_all(&self) -> Vec<String> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set by the transport while it is feeding this inbox.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

/// Longest payload excerpt kept for display.
pub const PAYLOAD_PREVIEW_CHARS: usize = 64;

/// First `PAYLOAD_PREVIEW_CHARS` characters of `raw`, ellipsised if cut.
pub fn payload_preview(raw: &str) -> String {
    let raw = raw.trim();
    match raw.char_indices().nth(PAYLOAD_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &raw[..cut]),
        None => raw.to_string(),
    }
}

/// Running tally of the stream, read by the control surface.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigStreamStatus {
    pub accepted: u64,
    pub rejected: u64,
    pub last_error: Option<String>,
    /// Excerpt of the most recently accepted payload.
    pub last_accepted: Option<String>,
}

pub fn drain_config_inbox(
    inbox: Res<ConfigInbox>,
    mut status: ResMut<ConfigStreamStatus>,
    mut active: ResMut<ActiveSettings>,
    mut rebuilds: EventWriter<RebuildRequested>,
    mut rejected: EventWriter<SettingsRejected>,
) {
    for raw in inbox.take_all() {
        match parse_settings(&raw) {
            Ok(settings) => {
                let revision = active.replace(settings.clone(), SettingsSource::Stream);
                status.accepted += 1;
                status.last_accepted = Some(payload_preview(&raw));
                info!("Streamed scene settings accepted (revision {})", revision);
                rebuilds.send(RebuildRequested {
                    settings,
                    source: SettingsSource::Stream,
                });
            }
            Err(e) => {
                error!("Rejected streamed scene settings: {}", e);
                status.rejected += 1;
                status.last_error = Some(e.to_string());
                rejected.send(SettingsRejected { error: e });
            }
        }
    }
}
