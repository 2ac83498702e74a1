use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config_stream::ConfigInbox;
use simulation::scene_config::SceneConfig;

#[cfg(not(target_arch = "wasm32"))]
mod stdin_feed;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Skyscape".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn".to_string(),
                ..default()
            }),
    )
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    });

    // Read after LogPlugin so config warnings are visible.
    let config = SceneConfig::from_env();
    info!(
        "Starting with seed {}, environment {:?}, time {:?}",
        config.seed, config.initial_environment, config.initial_time
    );

    let inbox = ConfigInbox::default();
    if config.stdin_feed {
        #[cfg(not(target_arch = "wasm32"))]
        stdin_feed::spawn(inbox.clone());
        #[cfg(target_arch = "wasm32")]
        warn!("Stdin settings feed is not available on this platform");
    }

    app.insert_resource(config)
        .insert_resource(inbox)
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    app.run();
}
