//! Runtime configuration, read once at startup.
//!
//! The binary builds a `SceneConfig` from `SKYSCAPE_*` environment variables
//! and inserts it before `SimulationPlugin`; the plugin falls back to
//! `SceneConfig::default()` when none is present.

use bevy::prelude::*;

use crate::config::{DEFAULT_CLOUD_TEXTURE, DEFAULT_MOON_TEXTURE};
use crate::scene_rng::DEFAULT_SEED;
use crate::weather_state::{Environment, TimeOfDay};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub cloud_texture: String,
    pub moon_texture: String,
    pub initial_environment: Option<Environment>,
    pub initial_time: Option<TimeOfDay>,
    /// Read newline-delimited JSON settings from stdin.
    pub stdin_feed: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            cloud_texture: DEFAULT_CLOUD_TEXTURE.to_string(),
            moon_texture: DEFAULT_MOON_TEXTURE.to_string(),
            initial_environment: Some(Environment::Rainy),
            initial_time: Some(TimeOfDay::Night),
            stdin_feed: false,
        }
    }
}

impl SceneConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the
    /// default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("SKYSCAPE_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(e) => warn!("Ignoring SKYSCAPE_SEED='{}': {}", raw, e),
            }
        }
        if let Some(path) = lookup("SKYSCAPE_CLOUD_TEXTURE") {
            config.cloud_texture = path;
        }
        if let Some(path) = lookup("SKYSCAPE_MOON_TEXTURE") {
            config.moon_texture = path;
        }
        // Unknown names select "unset".
        if let Some(name) = lookup("SKYSCAPE_ENVIRONMENT") {
            config.initial_environment = Environment::parse(&name);
        }
        if let Some(name) = lookup("SKYSCAPE_TIME") {
            config.initial_time = TimeOfDay::parse(&name);
        }
        if let Some(flag) = lookup("SKYSCAPE_STDIN_FEED") {
            config.stdin_feed = matches!(flag.trim(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_lookup_is_default() {
        assert_eq!(SceneConfig::from_lookup(|_| None), SceneConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = SceneConfig::from_lookup(lookup_from(&[
            ("SKYSCAPE_SEED", "1234"),
            ("SKYSCAPE_CLOUD_TEXTURE", "textures/cumulus.png"),
            ("SKYSCAPE_ENVIRONMENT", "Snowy"),
            ("SKYSCAPE_TIME", "morning"),
            ("SKYSCAPE_STDIN_FEED", "1"),
        ]));
        assert_eq!(config.seed, 1234);
        assert_eq!(config.cloud_texture, "textures/cumulus.png");
        assert_eq!(config.moon_texture, DEFAULT_MOON_TEXTURE);
        assert_eq!(config.initial_environment, Some(Environment::Snowy));
        assert_eq!(config.initial_time, Some(TimeOfDay::Morning));
        assert!(config.stdin_feed);
    }

    #[test]
    fn test_bad_seed_keeps_default() {
        let config = SceneConfig::from_lookup(lookup_from(&[("SKYSCAPE_SEED", "many")]));
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_unknown_environment_is_unset() {
        let config = SceneConfig::from_lookup(lookup_from(&[("SKYSCAPE_ENVIRONMENT", "foggy")]));
        assert_eq!(config.initial_environment, None);
    }
}
