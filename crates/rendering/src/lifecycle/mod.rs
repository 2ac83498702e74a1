//! Scene lifecycle: one live scene graph at a time.
//!
//! `rebuild` is the only way a scene comes into existence. It always tears
//! the previous generation down first, advances `SceneGeneration`, then
//! builds the new graph and records everything it created in `SceneHandle`.
//! `teardown` releases exactly what the handle recorded and is safe to call
//! any number of times.

use bevy::prelude::*;

use simulation::generation::SceneGeneration;
use simulation::scene_state::RebuildRequested;
use simulation::settings::SceneSettings;

use crate::frame_driver::FrameDriver;
use crate::textures::TextureLoads;

mod build;

#[cfg(test)]
pub(crate) mod tests_support;

pub(crate) use build::{spawn_clouds, spawn_moon};

/// Tag carried by every entity a build spawns.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneMember {
    pub generation: u64,
}

/// Everything the live scene generation owns.
#[derive(Resource, Debug, Default)]
pub struct SceneHandle {
    pub generation: u64,
    pub settings: Option<SceneSettings>,
    pub camera: Option<Entity>,
    pub sun: Option<Entity>,
    pub flash: Option<Entity>,
    pub precipitation: Option<Entity>,
    pub precipitation_mesh: Option<Handle<Mesh>>,
    pub clouds: Vec<Entity>,
    pub moon: Option<Entity>,
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
    /// Set once the cloud texture of this generation has resolved either way.
    pub clouds_resolved: bool,
}

impl SceneHandle {
    pub fn is_empty(&self) -> bool {
        self.settings.is_none()
            && self.entities().is_empty()
            && self.meshes.is_empty()
            && self.materials.is_empty()
    }

    pub fn entities(&self) -> Vec<Entity> {
        let singles = [
            self.camera,
            self.sun,
            self.flash,
            self.precipitation,
            self.moon,
        ];
        let mut out: Vec<Entity> = singles.into_iter().flatten().collect();
        out.extend_from_slice(&self.clouds);
        out
    }

    pub fn bloom(&self) -> bool {
        self.settings.as_ref().is_some_and(|s| s.bloom)
    }

    pub fn precipitation_mesh(&self) -> Option<Handle<Mesh>> {
        self.precipitation_mesh.clone()
    }
}

/// Release the live scene generation, if any.
///
/// Despawns every recorded entity, frees every recorded mesh and material,
/// drops pending texture loads, and blacks out the global lighting the build
/// set. A second call finds an empty handle and changes nothing.
pub fn teardown(world: &mut World) {
    let handle = std::mem::take(&mut *world.resource_mut::<SceneHandle>());

    for entity in handle.entities() {
        if world.entities().contains(entity) {
            world.despawn(entity);
        }
    }
    if let Some(mut meshes) = world.get_resource_mut::<Assets<Mesh>>() {
        for mesh in &handle.meshes {
            meshes.remove(mesh);
        }
    }
    if let Some(mut materials) = world.get_resource_mut::<Assets<StandardMaterial>>() {
        for material in &handle.materials {
            materials.remove(material);
        }
    }

    world.insert_resource(AmbientLight {
        color: Color::BLACK,
        brightness: 0.0,
    });
    world.insert_resource(ClearColor(Color::BLACK));

    if let Some(mut loads) = world.get_resource_mut::<TextureLoads>() {
        loads.clear();
    }
    if let Some(mut driver) = world.get_resource_mut::<FrameDriver>() {
        driver.pause();
    }

    if handle.settings.is_some() {
        debug!("Scene generation {} torn down", handle.generation);
    }
}

/// Replace the live scene with one built from `settings`. Returns the new
/// generation id.
pub fn rebuild(world: &mut World, settings: &SceneSettings) -> u64 {
    teardown(world);
    let generation = world.resource_mut::<SceneGeneration>().advance();
    let handle = build::build_scene(world, settings, generation);
    info!(
        "Built scene generation {} ({} particles, {} clouds requested)",
        generation, settings.precipitation_count, settings.cloud_count
    );
    world.insert_resource(handle);
    generation
}

/// Exclusive system: apply every pending rebuild request in arrival order.
pub fn apply_rebuild_requests(world: &mut World) {
    let requests: Vec<RebuildRequested> = world
        .resource_mut::<Events<RebuildRequested>>()
        .drain()
        .collect();
    if requests.is_empty() {
        return;
    }
    if world.resource::<FrameDriver>().is_stopped() {
        debug!("Ignoring {} rebuild request(s) after shutdown", requests.len());
        return;
    }
    for request in requests {
        debug!("Rebuild requested by {}", request.source.name());
        rebuild(world, &request.settings);
    }
}
