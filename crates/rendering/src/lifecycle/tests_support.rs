use bevy::asset::AssetPlugin;
use bevy::prelude::*;

use simulation::generation::SceneGeneration;
use simulation::scene_config::SceneConfig;
use simulation::scene_rng::SceneRng;

use super::SceneHandle;
use crate::frame_driver::FrameDriver;
use crate::textures::{
    attach_resolved_textures, poll_texture_loads, TextureLoads, TextureResolved,
};
use crate::viewport::Viewport;

/// Headless app holding every resource a build touches, with no renderer
/// and no asset server.
pub(crate) fn scene_app() -> App {
    let mut app = App::new();
    insert_scene_resources(&mut app);
    app
}

/// Headless app with a live `AssetServer` and the texture systems scheduled,
/// so loads resolve the way they do at runtime.
pub(crate) fn loading_scene_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Image>();
    insert_scene_resources(&mut app);
    app.add_systems(
        Update,
        (poll_texture_loads, attach_resolved_textures).chain(),
    );
    app
}

fn insert_scene_resources(app: &mut App) {
    app.init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .init_resource::<Assets<Image>>()
        .init_resource::<SceneHandle>()
        .init_resource::<SceneGeneration>()
        .init_resource::<TextureLoads>()
        .init_resource::<FrameDriver>()
        .init_resource::<Viewport>()
        .init_resource::<SceneRng>()
        .insert_resource(SceneConfig::default())
        .add_event::<TextureResolved>();
}

pub(crate) fn test_image(app: &mut App) -> Handle<Image> {
    app.world_mut()
        .resource_mut::<Assets<Image>>()
        .add(Image::default())
}
