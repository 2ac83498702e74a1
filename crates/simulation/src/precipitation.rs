//! Rain/snow particle buffer and its per-tick fall simulation.
//!
//! One `PrecipitationField` lives on the precipitation entity of a scene
//! generation and is dropped with it on teardown. Two motion models exist:
//! the accelerating model keeps a velocity per particle, the constant model
//! moves every particle by the same `fallVelocity`.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    PRECIPITATION_FLOOR_Y, PRECIPITATION_GRAVITY, PRECIPITATION_HALF_HEIGHT,
    PRECIPITATION_HALF_WIDTH, PRECIPITATION_RESPAWN_Y, PRECIPITATION_SPIN_PER_TICK,
};
use crate::settings::FallModel;

#[derive(Component, Debug, Clone)]
pub struct PrecipitationField {
    pub positions: Vec<Vec3>,
    /// One entry per particle for `FallModel::Accelerating`, empty otherwise.
    pub velocities: Vec<f32>,
    pub model: FallModel,
    /// Accumulated rotation of the whole field about Y, radians.
    pub spin: f32,
}

impl PrecipitationField {
    /// Scatter `count` particles uniformly inside the precipitation volume.
    pub fn seed<R: Rng + ?Sized>(count: usize, model: FallModel, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-PRECIPITATION_HALF_WIDTH..PRECIPITATION_HALF_WIDTH),
                    rng.gen_range(-PRECIPITATION_HALF_HEIGHT..PRECIPITATION_HALF_HEIGHT),
                    rng.gen_range(-PRECIPITATION_HALF_WIDTH..PRECIPITATION_HALF_WIDTH),
                )
            })
            .collect();
        let velocities = match model {
            FallModel::Accelerating => vec![0.0; count],
            FallModel::Constant(_) => Vec::new(),
        };
        Self {
            positions,
            velocities,
            model,
            spin: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advance every particle by one tick. Particles that cross the floor are
    /// respawned in the same tick, so none is ever left below it.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.model {
            FallModel::Accelerating => {
                for (pos, vel) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                    *vel -= PRECIPITATION_GRAVITY * rng.gen::<f32>();
                    pos.y += *vel;
                    if pos.y < PRECIPITATION_FLOOR_Y {
                        pos.y = PRECIPITATION_RESPAWN_Y;
                        *vel = 0.0;
                    }
                }
            }
            FallModel::Constant(fall_velocity) => {
                for pos in &mut self.positions {
                    pos.y -= fall_velocity;
                    if pos.y < PRECIPITATION_FLOOR_Y {
                        pos.y = PRECIPITATION_RESPAWN_Y;
                    }
                }
            }
        }
        self.spin += PRECIPITATION_SPIN_PER_TICK;
    }
}
