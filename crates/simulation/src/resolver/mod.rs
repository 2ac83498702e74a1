//! Parameter resolver: symbolic `(environment, time)` to `SceneSettings`.
//!
//! `resolve` is total and pure. Either axis may be unset (`None`); every rule
//! then falls through to its documented default instead of failing.

pub mod palette;
mod tests_golden;

use crate::settings::{SceneColor, SceneSettings};
use crate::weather_state::{Environment, TimeOfDay};

use palette::{
    light_intensities, sky_for_time, storm_sky, storm_tint, tint_for_time, FLASH_COLOR,
    PRECIPITATION_DARK_GRAY, PRECIPITATION_GRAY, PRECIPITATION_WHITE,
};

const FOG_DENSITY: f32 = 0.002;
const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 1.0];
const CAMERA_ROTATION: [f32; 3] = [1.16, -0.12, 0.27];
const FLASH_INTENSITY: f32 = 30.0;
const FLASH_DISTANCE: f32 = 500.0;
const FLASH_DECAY: f32 = 1.7;

/// Resolve a complete scene descriptor for the given weather state.
pub fn resolve(environment: Option<Environment>, time: Option<TimeOfDay>) -> SceneSettings {
    let (ambient, directional) = light_intensities(time);
    let night = time == Some(TimeOfDay::Night);

    SceneSettings {
        fog_density: FOG_DENSITY,
        camera_position: CAMERA_POSITION,
        camera_rotation: CAMERA_ROTATION,
        ambient_light_intensity: ambient,
        directional_light_intensity: directional,
        flash_color: FLASH_COLOR,
        flash_intensity: FLASH_INTENSITY,
        flash_distance: FLASH_DISTANCE,
        flash_decay: FLASH_DECAY,
        precipitation_count: precipitation_count(environment, time),
        precipitation_color: precipitation_color(environment, time),
        precipitation_size: precipitation_size(environment),
        fall_velocity: Some(fall_velocity(environment, time)),
        cloud_opacity: cloud_opacity(environment),
        cloud_count: cloud_count(environment, time),
        sky_color: sky_color(environment, time),
        cloud_tint: cloud_tint(environment, time),
        bloom: night,
        moon_visible: night
            && matches!(environment, Some(Environment::Clear | Environment::Cloudy)),
    }
}

/// Clear nights show a sparse field of static "stars".
pub fn precipitation_count(environment: Option<Environment>, time: Option<TimeOfDay>) -> u32 {
    match environment {
        Some(Environment::Clear) if time == Some(TimeOfDay::Night) => 500,
        Some(Environment::Clear) | Some(Environment::Cloudy) => 0,
        Some(Environment::Rainy) | Some(Environment::Snowy) => 10_000,
        None => 500,
    }
}

pub fn precipitation_color(
    environment: Option<Environment>,
    time: Option<TimeOfDay>,
) -> SceneColor {
    match (environment, time) {
        (Some(Environment::Clear), Some(TimeOfDay::Night)) => PRECIPITATION_WHITE,
        (_, Some(TimeOfDay::Night)) => PRECIPITATION_DARK_GRAY,
        (Some(Environment::Rainy), Some(TimeOfDay::Afternoon)) => PRECIPITATION_WHITE,
        _ => PRECIPITATION_GRAY,
    }
}

pub fn precipitation_size(environment: Option<Environment>) -> f32 {
    match environment {
        Some(Environment::Rainy) => 0.1,
        Some(Environment::Snowy) => 1.0,
        _ => 0.1,
    }
}

pub fn fall_velocity(environment: Option<Environment>, time: Option<TimeOfDay>) -> f32 {
    match (environment, time) {
        (Some(Environment::Snowy), _) => 0.5,
        (Some(Environment::Clear), Some(TimeOfDay::Night)) => 0.0,
        _ => 3.0,
    }
}

pub fn cloud_opacity(environment: Option<Environment>) -> f32 {
    match environment {
        Some(Environment::Clear) => 0.3,
        _ => 1.0,
    }
}

pub fn cloud_count(environment: Option<Environment>, time: Option<TimeOfDay>) -> u32 {
    match environment {
        Some(Environment::Clear) => 10,
        Some(Environment::Cloudy) if time == Some(TimeOfDay::Morning) => 15,
        Some(Environment::Cloudy) => 30,
        Some(Environment::Rainy) => 40,
        Some(Environment::Snowy) => 20,
        None => 25,
    }
}

/// Rain and snow override the time-of-day sky regardless of the time set.
pub fn sky_color(environment: Option<Environment>, time: Option<TimeOfDay>) -> SceneColor {
    match environment {
        Some(env) if env.is_precipitating() => storm_sky(time),
        _ => sky_for_time(time),
    }
}

pub fn cloud_tint(environment: Option<Environment>, time: Option<TimeOfDay>) -> SceneColor {
    match environment {
        Some(env) if env.is_precipitating() => storm_tint(time),
        _ => tint_for_time(time),
    }
}
