use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::SceneSet;

pub mod weather_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<weather_panel::WeatherPanelVisible>()
            .add_systems(
                Update,
                (
                    weather_panel::weather_keybinds,
                    weather_panel::weather_panel_ui,
                )
                    .chain()
                    .before(SceneSet::Input),
            );
    }
}
