use bevy::prelude::*;

use crate::resolver::resolve;
use crate::settings::SceneSettings;
use crate::settings_error::SettingsParseError;
use crate::weather_state::{Environment, TimeOfDay};

/// Where the active settings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    /// Resolved from the user's environment/time selection.
    Selection,
    /// Received whole from the config stream.
    Stream,
}

impl SettingsSource {
    pub fn name(self) -> &'static str {
        match self {
            SettingsSource::Selection => "Selection",
            SettingsSource::Stream => "Stream",
        }
    }
}

/// The settings currently in force. Always replaced whole, never merged.
#[derive(Resource, Debug, Clone)]
pub struct ActiveSettings {
    pub settings: SceneSettings,
    pub source: SettingsSource,
    /// Bumped on every replacement.
    pub revision: u64,
}

impl Default for ActiveSettings {
    fn default() -> Self {
        Self {
            settings: resolve(Some(Environment::Rainy), Some(TimeOfDay::Night)),
            source: SettingsSource::Selection,
            revision: 0,
        }
    }
}

impl ActiveSettings {
    pub fn replace(&mut self, settings: SceneSettings, source: SettingsSource) -> u64 {
        self.settings = settings;
        self.source = source;
        self.revision += 1;
        self.revision
    }
}

/// Ask the scene lifecycle to tear down and rebuild with these settings.
#[derive(Event, Debug, Clone)]
pub struct RebuildRequested {
    pub settings: SceneSettings,
    pub source: SettingsSource,
}

/// A streamed payload was refused. Fired once per refused payload.
#[derive(Event, Debug, Clone)]
pub struct SettingsRejected {
    pub error: SettingsParseError,
}
