//! Lightning flash: a point light whose power flickers in bursts.
//!
//! Each tick a flash triggers on a rare random draw, or keeps re-triggering
//! while power is still above `FLASH_SUSTAIN_POWER`. A trigger from low power
//! relocates the light inside a horizontal band. Power then decays
//! multiplicatively every tick, so bursts fade out exponentially instead of
//! blinking on a fixed period.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    FLASH_BAND_HEIGHT, FLASH_BAND_MIN_Y, FLASH_BAND_WIDTH, FLASH_BAND_Z, FLASH_DECAY_FACTOR,
    FLASH_INITIAL_POSITION, FLASH_MIN_POWER, FLASH_POWER_RANGE, FLASH_SUSTAIN_POWER,
    FLASH_TRIGGER_CHANCE,
};
use crate::settings::{SceneColor, SceneSettings};

/// Lumens per unit of `power * flashIntensity`.
const LUMENS_PER_POWER: f32 = 40.0;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlashState {
    pub power: f32,
    pub decay_factor: f32,
    pub position: Vec3,
    pub color: SceneColor,
    pub intensity: f32,
    pub distance: f32,
    /// Distance falloff exponent from the payload. Bevy point lights use a
    /// physical inverse-square falloff, so this is carried but not applied.
    pub falloff: f32,
}

impl FlashState {
    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self {
            power: 0.0,
            decay_factor: FLASH_DECAY_FACTOR,
            position: Vec3::from_array(FLASH_INITIAL_POSITION),
            color: settings.flash_color,
            intensity: settings.flash_intensity,
            distance: settings.flash_distance,
            falloff: settings.flash_decay,
        }
    }

    /// Advance one tick. Returns `true` when the flash (re)triggered.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let triggered = rng.gen::<f32>() > FLASH_TRIGGER_CHANCE || self.power > FLASH_SUSTAIN_POWER;
        if triggered {
            if self.power < FLASH_SUSTAIN_POWER {
                self.position = Vec3::new(
                    rng.gen::<f32>() * FLASH_BAND_WIDTH,
                    FLASH_BAND_MIN_Y + rng.gen::<f32>() * FLASH_BAND_HEIGHT,
                    FLASH_BAND_Z,
                );
            }
            self.power = FLASH_MIN_POWER + rng.gen::<f32>() * FLASH_POWER_RANGE;
        }
        self.power *= self.decay_factor;
        triggered
    }

    /// Point-light intensity in lumens for the current power.
    pub fn lumens(&self) -> f32 {
        self.power * self.intensity * LUMENS_PER_POWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::scene_rng::SceneRng;
    use crate::weather_state::{Environment, TimeOfDay};

    fn flash() -> FlashState {
        FlashState::from_settings(&resolve(Some(Environment::Rainy), Some(TimeOfDay::Night)))
    }

    #[test]
    fn test_initial_state() {
        let f = flash();
        assert_eq!(f.power, 0.0);
        assert_eq!(f.position, Vec3::new(200.0, 300.0, 100.0));
        assert_eq!(f.intensity, 30.0);
        assert_eq!(f.distance, 500.0);
        assert_eq!(f.lumens(), 0.0);
    }

    #[test]
    fn test_power_non_negative_and_decays_without_trigger() {
        let mut rng = SceneRng::from_seed_u64(2024);
        let mut f = flash();
        for tick in 0..10_000 {
            let before = f.power;
            let triggered = f.step(&mut rng.0);
            assert!(f.power >= 0.0, "tick {tick}: negative power {}", f.power);
            if !triggered {
                assert!(
                    f.power <= before,
                    "tick {tick}: power rose from {before} to {} without a trigger",
                    f.power
                );
            }
        }
    }

    #[test]
    fn test_triggers_are_bursty_not_constant() {
        let mut rng = SceneRng::from_seed_u64(77);
        let mut f = flash();
        let triggers = (0..10_000).filter(|_| f.step(&mut rng.0)).count();
        // Rare random triggers plus sustain chains: well above 4% of ticks,
        // far below every tick.
        assert!(triggers > 400, "too few triggers: {triggers}");
        assert!(triggers < 5_000, "too many triggers: {triggers}");
    }

    #[test]
    fn test_high_power_always_retriggers() {
        let mut rng = SceneRng::from_seed_u64(1);
        let mut f = flash();
        f.power = 400.0;
        let position = f.position;
        assert!(f.step(&mut rng.0));
        assert_eq!(f.position, position, "sustained flash must not relocate");
        let upper = (FLASH_MIN_POWER + FLASH_POWER_RANGE) * FLASH_DECAY_FACTOR;
        let lower = FLASH_MIN_POWER * FLASH_DECAY_FACTOR;
        assert!(f.power >= lower && f.power <= upper, "power {}", f.power);
    }

    #[test]
    fn test_trigger_from_low_power_relocates_inside_band() {
        let mut rng = SceneRng::from_seed_u64(5);
        let mut f = flash();
        let mut relocated = 0;
        for _ in 0..5_000 {
            let was_low = f.power < FLASH_SUSTAIN_POWER;
            if f.step(&mut rng.0) && was_low {
                relocated += 1;
                assert!((0.0..400.0).contains(&f.position.x));
                assert!((300.0..500.0).contains(&f.position.y));
                assert_eq!(f.position.z, 100.0);
            }
        }
        assert!(relocated > 0);
    }

    #[test]
    fn test_decays_toward_zero_between_triggers() {
        let mut f = flash();
        f.power = 90.0;
        let mut quiet = rand::rngs::mock::StepRng::new(0, 0);
        for _ in 0..100 {
            assert!(!f.step(&mut quiet));
        }
        assert!(f.power < 0.1, "power should fade out, got {}", f.power);
    }

    #[test]
    fn test_lumens_scale_with_power() {
        let mut f = flash();
        f.power = 10.0;
        assert_eq!(f.lumens(), 10.0 * 30.0 * 40.0);
    }
}
