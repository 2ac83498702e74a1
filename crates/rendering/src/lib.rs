use bevy::prelude::*;

pub mod frame_driver;
pub mod lifecycle;
pub mod precipitation_mesh;
pub mod textures;
pub mod viewport;

use frame_driver::FrameDriver;
use lifecycle::SceneHandle;
use simulation::SceneSet;
use textures::{TextureLoads, TextureResolved};
use viewport::Viewport;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneHandle>()
            .init_resource::<TextureLoads>()
            .init_resource::<FrameDriver>()
            .init_resource::<Viewport>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_event::<TextureResolved>()
            .add_systems(Startup, viewport::init_viewport)
            .add_systems(
                Update,
                lifecycle::apply_rebuild_requests.in_set(SceneSet::Rebuild),
            )
            .add_systems(
                Update,
                (
                    textures::poll_texture_loads,
                    textures::attach_resolved_textures,
                )
                    .chain()
                    .in_set(SceneSet::Textures),
            )
            .add_systems(
                Update,
                (
                    frame_driver::advance_precipitation,
                    frame_driver::drift_clouds,
                    frame_driver::advance_flash,
                    frame_driver::count_tick,
                )
                    .chain()
                    .in_set(SceneSet::Simulate)
                    .run_if(frame_driver::frame_driver_running),
            )
            .add_systems(
                Update,
                viewport::handle_window_resized
                    .after(SceneSet::Rebuild)
                    .run_if(not(frame_driver::frame_driver_stopped)),
            )
            .add_systems(Last, frame_driver::shutdown_on_exit);
    }
}
