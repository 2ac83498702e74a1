use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    CLOUD_ALTITUDE, CLOUD_DEPTH_Z, CLOUD_DRIFT_PER_TICK, CLOUD_DRIFT_PER_TICK_BLOOM,
    CLOUD_HALF_SPREAD_X, CLOUD_TILT_X, CLOUD_TILT_Y,
};

/// One textured cloud billboard. Tilt is fixed; only `spin` changes per tick.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct CloudCard {
    pub position: Vec3,
    pub tilt: Vec2,
    pub spin: f32,
}

impl CloudCard {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, self.spin)
    }

    pub fn drift(&mut self, bloom: bool) {
        self.spin -= drift_per_tick(bloom);
    }
}

pub fn drift_per_tick(bloom: bool) -> f32 {
    if bloom {
        CLOUD_DRIFT_PER_TICK_BLOOM
    } else {
        CLOUD_DRIFT_PER_TICK
    }
}

/// Lay out `count` cards above the scene with random placement and spin.
pub fn scatter_clouds<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<CloudCard> {
    (0..count)
        .map(|_| CloudCard {
            position: Vec3::new(
                rng.gen_range(-CLOUD_HALF_SPREAD_X..CLOUD_HALF_SPREAD_X),
                CLOUD_ALTITUDE,
                rng.gen_range(-CLOUD_DEPTH_Z..0.0),
            ),
            tilt: Vec2::new(CLOUD_TILT_X, CLOUD_TILT_Y),
            spin: rng.gen_range(0.0..TAU),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_rng::SceneRng;

    #[test]
    fn test_scatter_bounds() {
        let mut rng = SceneRng::from_seed_u64(4);
        let cards = scatter_clouds(200, &mut rng.0);
        assert_eq!(cards.len(), 200);
        for c in &cards {
            assert!((-400.0..400.0).contains(&c.position.x));
            assert_eq!(c.position.y, 500.0);
            assert!((-500.0..0.0).contains(&c.position.z));
            assert!((0.0..TAU).contains(&c.spin));
            assert_eq!(c.tilt, Vec2::new(1.16, -0.12));
        }
    }

    #[test]
    fn test_scatter_zero() {
        let mut rng = SceneRng::default();
        assert!(scatter_clouds(0, &mut rng.0).is_empty());
    }

    #[test]
    fn test_drift_is_slower_with_bloom() {
        let mut rng = SceneRng::default();
        let mut plain = scatter_clouds(1, &mut rng.0).remove(0);
        let mut glowing = plain.clone();
        let start = plain.spin;
        for _ in 0..100 {
            plain.drift(false);
            glowing.drift(true);
        }
        assert!((start - plain.spin - 0.2).abs() < 1e-4);
        assert!((start - glowing.spin - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_drift_keeps_tilt_and_position() {
        let mut rng = SceneRng::default();
        let mut card = scatter_clouds(1, &mut rng.0).remove(0);
        let before = card.clone();
        card.drift(false);
        assert_eq!(card.position, before.position);
        assert_eq!(card.tilt, before.tilt);
        assert!(card.spin < before.spin);
    }
}
