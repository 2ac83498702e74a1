//! Canonical colour and lighting tables for the resolver.

use crate::settings::SceneColor;
use crate::weather_state::TimeOfDay;

pub const PRECIPITATION_WHITE: SceneColor = SceneColor(0xffffff);
pub const PRECIPITATION_DARK_GRAY: SceneColor = SceneColor(0x333333);
pub const PRECIPITATION_GRAY: SceneColor = SceneColor(0xaaaaaa);

pub const FLASH_COLOR: SceneColor = SceneColor(0x062d89);

/// Sky colour by time of day for clear and cloudy scenes.
pub fn sky_for_time(time: Option<TimeOfDay>) -> SceneColor {
    match time {
        Some(TimeOfDay::Morning) => SceneColor(0xf6c6a8),
        Some(TimeOfDay::Afternoon) => SceneColor(0x87ceeb),
        Some(TimeOfDay::Evening) => SceneColor(0xf08a5d),
        Some(TimeOfDay::Night) => SceneColor(0x0b1026),
        None => SceneColor(0x11111f),
    }
}

/// Sky colour while it rains or snows.
pub fn storm_sky(time: Option<TimeOfDay>) -> SceneColor {
    match time {
        Some(TimeOfDay::Night) => SceneColor(0x0a0a0f),
        Some(TimeOfDay::Afternoon) => SceneColor(0x808080),
        _ => SceneColor(0x3a3a3a),
    }
}

pub fn tint_for_time(time: Option<TimeOfDay>) -> SceneColor {
    match time {
        Some(TimeOfDay::Morning) => SceneColor(0xffe8dc),
        Some(TimeOfDay::Afternoon) => SceneColor(0xffffff),
        Some(TimeOfDay::Evening) => SceneColor(0xffc2a1),
        Some(TimeOfDay::Night) => SceneColor(0x3a3f5c),
        None => SceneColor(0xffffff),
    }
}

pub fn storm_tint(time: Option<TimeOfDay>) -> SceneColor {
    match time {
        Some(TimeOfDay::Night) => SceneColor(0x202024),
        Some(TimeOfDay::Afternoon) => SceneColor(0x9a9a9a),
        _ => SceneColor(0x5a5a5a),
    }
}

/// `(ambient, directional)` light intensity. Morning is the dimmest time.
pub fn light_intensities(time: Option<TimeOfDay>) -> (f32, f32) {
    match time {
        Some(TimeOfDay::Morning) => (0.6, 0.3),
        _ => (1.0, 0.5),
    }
}
