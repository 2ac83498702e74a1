//! The scene descriptor shared by every component.
//!
//! `SceneSettings` is produced either by the resolver or by a streamed JSON
//! payload and is consumed whole by the scene lifecycle. The JSON shape uses
//! camelCase keys, rejects unknown keys, and requires every key to be present.

use bevy::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{MAX_CLOUD_COUNT, MAX_PRECIPITATION_COUNT};
use crate::settings_error::SettingsParseError;

/// Packed `0xRRGGBB` colour as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneColor(pub u32);

impl SceneColor {
    pub const WHITE: SceneColor = SceneColor(0xffffff);

    pub fn rgb8(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    pub fn is_valid(self) -> bool {
        self.0 <= 0xffffff
    }

    pub fn to_color(self) -> Color {
        let [r, g, b] = self.rgb8();
        Color::srgb_u8(r, g, b)
    }

    pub fn to_color_with_alpha(self, alpha: f32) -> Color {
        self.to_color().with_alpha(alpha)
    }
}

/// How precipitation particles move for one scene generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallModel {
    /// Per-particle velocity grows by a random increment each tick.
    Accelerating,
    /// Every particle falls by the same distance each tick.
    Constant(f32),
}

/// Fully-resolved numeric descriptor of one scene generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneSettings {
    pub fog_density: f32,
    pub camera_position: [f32; 3],
    /// Euler angles (XYZ order), radians.
    pub camera_rotation: [f32; 3],
    pub ambient_light_intensity: f32,
    pub directional_light_intensity: f32,
    pub flash_color: SceneColor,
    pub flash_intensity: f32,
    pub flash_distance: f32,
    pub flash_decay: f32,
    pub precipitation_count: u32,
    pub precipitation_color: SceneColor,
    pub precipitation_size: f32,
    /// `None` selects the accelerating fall model. The key itself is required.
    #[serde(deserialize_with = "required_nullable")]
    pub fall_velocity: Option<f32>,
    pub cloud_opacity: f32,
    pub cloud_count: u32,
    pub sky_color: SceneColor,
    pub cloud_tint: SceneColor,
    pub bloom: bool,
    pub moon_visible: bool,
}

/// Deserializing through a custom function keeps serde from defaulting a
/// missing `Option` key to `None`; only an explicit `null` is accepted.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f32>::deserialize(deserializer)
}

impl SceneSettings {
    pub fn fall_model(&self) -> FallModel {
        match self.fall_velocity {
            Some(v) => FallModel::Constant(v),
            None => FallModel::Accelerating,
        }
    }

    /// Range-check every field. Parsing guarantees shape; this guarantees
    /// the values can be built into a scene.
    pub fn validate(&self) -> Result<(), SettingsParseError> {
        positive("fogDensity", self.fog_density)?;
        for v in self.camera_position {
            finite("cameraPosition", v)?;
        }
        for v in self.camera_rotation {
            finite("cameraRotation", v)?;
        }
        non_negative("ambientLightIntensity", self.ambient_light_intensity)?;
        non_negative("directionalLightIntensity", self.directional_light_intensity)?;
        color("flashColor", self.flash_color)?;
        non_negative("flashIntensity", self.flash_intensity)?;
        positive("flashDistance", self.flash_distance)?;
        non_negative("flashDecay", self.flash_decay)?;
        if self.precipitation_count > MAX_PRECIPITATION_COUNT {
            return Err(SettingsParseError::invalid(
                "precipitationCount",
                format!(
                    "at most {MAX_PRECIPITATION_COUNT} particles, got {}",
                    self.precipitation_count
                ),
            ));
        }
        color("precipitationColor", self.precipitation_color)?;
        positive("precipitationSize", self.precipitation_size)?;
        if let Some(v) = self.fall_velocity {
            non_negative("fallVelocity", v)?;
        }
        if !(0.0..=1.0).contains(&self.cloud_opacity) {
            return Err(SettingsParseError::invalid(
                "cloudOpacity",
                format!("must be within 0..=1, got {}", self.cloud_opacity),
            ));
        }
        if self.cloud_count > MAX_CLOUD_COUNT {
            return Err(SettingsParseError::invalid(
                "cloudCount",
                format!("at most {MAX_CLOUD_COUNT} clouds, got {}", self.cloud_count),
            ));
        }
        color("skyColor", self.sky_color)?;
        color("cloudTint", self.cloud_tint)?;
        Ok(())
    }
}

fn finite(field: &'static str, v: f32) -> Result<(), SettingsParseError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SettingsParseError::invalid(field, format!("must be finite, got {v}")))
    }
}

fn non_negative(field: &'static str, v: f32) -> Result<(), SettingsParseError> {
    finite(field, v)?;
    if v >= 0.0 {
        Ok(())
    } else {
        Err(SettingsParseError::invalid(field, format!("must be >= 0, got {v}")))
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), SettingsParseError> {
    finite(field, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(SettingsParseError::invalid(field, format!("must be > 0, got {v}")))
    }
}

fn color(field: &'static str, c: SceneColor) -> Result<(), SettingsParseError> {
    if c.is_valid() {
        Ok(())
    } else {
        Err(SettingsParseError::invalid(
            field,
            format!("must be a 0xRRGGBB value, got {:#x}", c.0),
        ))
    }
}
