use bevy::prelude::*;

pub mod cloud;
pub mod config;
pub mod config_stream;
pub mod flash;
pub mod generation;
pub mod precipitation;
pub mod resolver;
pub mod scene_config;
pub mod scene_rng;
pub mod scene_state;
pub mod selection;
pub mod settings;
pub mod settings_error;
pub mod weather_state;

use config_stream::{ConfigInbox, ConfigStreamStatus};
use generation::SceneGeneration;
use scene_config::SceneConfig;
use scene_rng::SceneRng;
use scene_state::{ActiveSettings, RebuildRequested, SettingsRejected, SettingsSource};
use selection::WeatherSelection;

/// Per-frame ordering shared by every scene crate.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Selection changes and streamed payloads become rebuild requests.
    Input,
    /// Teardown and build of the scene graph.
    Rebuild,
    /// Texture load tracking and late attachment of textured elements.
    Textures,
    /// Particle, cloud and flash ticks.
    Simulate,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SceneConfig>()
            .cloned()
            .unwrap_or_default();
        let settings = resolver::resolve(config.initial_environment, config.initial_time);

        app.insert_resource(SceneRng::from_seed_u64(config.seed))
            .insert_resource(WeatherSelection {
                environment: config.initial_environment,
                time: config.initial_time,
            })
            .insert_resource(ActiveSettings {
                settings,
                source: SettingsSource::Selection,
                revision: 0,
            })
            .insert_resource(config)
            .init_resource::<SceneGeneration>()
            .init_resource::<ConfigInbox>()
            .init_resource::<ConfigStreamStatus>()
            .add_event::<RebuildRequested>()
            .add_event::<SettingsRejected>()
            .configure_sets(
                Update,
                (
                    SceneSet::Input,
                    SceneSet::Rebuild,
                    SceneSet::Textures,
                    SceneSet::Simulate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    selection::resolve_selection,
                    config_stream::drain_config_inbox,
                )
                    .chain()
                    .in_set(SceneSet::Input),
            );
    }
}
