//! User-selected `(environment, time)` and the system that resolves it.

use bevy::prelude::*;

use crate::resolver::resolve;
use crate::scene_state::{ActiveSettings, RebuildRequested, SettingsSource};
use crate::weather_state::{Environment, TimeOfDay};

/// Current choice from the control surface. Either axis may be unset.
///
/// Mutate through `set_if_neq` so an unchanged selection does not trigger
/// a rebuild.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSelection {
    pub environment: Option<Environment>,
    pub time: Option<TimeOfDay>,
}

impl Default for WeatherSelection {
    fn default() -> Self {
        Self {
            environment: Some(Environment::Rainy),
            time: Some(TimeOfDay::Night),
        }
    }
}

/// Resolve the selection whenever it changes (including the first frame) and
/// request a rebuild with the result.
pub fn resolve_selection(
    selection: Res<WeatherSelection>,
    mut active: ResMut<ActiveSettings>,
    mut rebuilds: EventWriter<RebuildRequested>,
) {
    if !selection.is_changed() {
        return;
    }

    let settings = resolve(selection.environment, selection.time);
    let revision = active.replace(settings.clone(), SettingsSource::Selection);
    info!(
        "Weather selection {} / {} resolved (revision {})",
        selection.environment.map_or("unset", Environment::name),
        selection.time.map_or("unset", TimeOfDay::name),
        revision
    );
    rebuilds.send(RebuildRequested {
        settings,
        source: SettingsSource::Selection,
    });
}
