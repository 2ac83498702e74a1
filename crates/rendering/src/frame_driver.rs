//! Per-tick animation of a built scene.
//!
//! The driver waits after each build until the first cloud texture resolution
//! of that generation, then runs every frame until the next teardown. Once
//! stopped (on exit) it never runs again.

use bevy::prelude::*;

use simulation::cloud::CloudCard;
use simulation::flash::FlashState;
use simulation::precipitation::PrecipitationField;
use simulation::scene_rng::SceneRng;

use crate::lifecycle::{self, SceneHandle};
use crate::precipitation_mesh::{write_positions, PrecipitationSprite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Waiting,
    Running,
    Stopped,
}

#[derive(Resource, Debug, Default)]
pub struct FrameDriver {
    state: DriverState,
    ticks: u64,
}

impl FrameDriver {
    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.state == DriverState::Stopped
    }

    /// Ticks run since startup, across all generations.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn start(&mut self) {
        if self.state == DriverState::Waiting {
            self.state = DriverState::Running;
            debug!("Frame driver running");
        }
    }

    /// Back to waiting for the next build's first texture.
    pub fn pause(&mut self) {
        if self.state == DriverState::Running {
            self.state = DriverState::Waiting;
        }
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }
}

pub fn frame_driver_running(driver: Res<FrameDriver>) -> bool {
    driver.is_running()
}

pub fn frame_driver_stopped(driver: Res<FrameDriver>) -> bool {
    driver.is_stopped()
}

pub fn advance_precipitation(
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fields: Query<(
        &mut PrecipitationField,
        &PrecipitationSprite,
        &Mesh3d,
        &mut Transform,
    )>,
) {
    for (mut field, sprite, mesh, mut transform) in fields.iter_mut() {
        field.step(&mut rng.0);
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            write_positions(mesh, &field, sprite.size);
        }
        transform.rotation = Quat::from_rotation_y(field.spin);
    }
}

pub fn drift_clouds(
    handle: Res<SceneHandle>,
    mut clouds: Query<(&mut CloudCard, &mut Transform)>,
) {
    let bloom = handle.bloom();
    for (mut card, mut transform) in clouds.iter_mut() {
        card.drift(bloom);
        transform.rotation = card.rotation();
    }
}

pub fn advance_flash(
    mut rng: ResMut<SceneRng>,
    mut flashes: Query<(&mut FlashState, &mut PointLight, &mut Transform)>,
) {
    for (mut flash, mut light, mut transform) in flashes.iter_mut() {
        flash.step(&mut rng.0);
        light.intensity = flash.lumens();
        transform.translation = flash.position;
    }
}

pub fn count_tick(mut driver: ResMut<FrameDriver>) {
    driver.ticks += 1;
}

/// Tear the scene down and stop the driver for good.
pub fn shutdown(world: &mut World) {
    lifecycle::teardown(world);
    world.resource_mut::<FrameDriver>().stop();
    info!("Scene shut down");
}

pub fn shutdown_on_exit(world: &mut World) {
    if world.resource::<FrameDriver>().is_stopped() {
        return;
    }
    let exiting = world
        .get_resource::<Events<AppExit>>()
        .is_some_and(|events| !events.is_empty());
    if exiting {
        shutdown(world);
    }
}
