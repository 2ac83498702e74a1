// ---------------------------------------------------------------------------
// Precipitation volume
// ---------------------------------------------------------------------------

/// Half-extent of the precipitation volume on the X and Z axes.
pub const PRECIPITATION_HALF_WIDTH: f32 = 200.0;
/// Half-extent of the initial precipitation spawn band on the Y axis.
pub const PRECIPITATION_HALF_HEIGHT: f32 = 250.0;
/// Particles below this height are respawned at `PRECIPITATION_RESPAWN_Y`.
pub const PRECIPITATION_FLOOR_Y: f32 = -100.0;
pub const PRECIPITATION_RESPAWN_Y: f32 = 100.0;
/// Upper bound on the random per-tick velocity increment of the accelerating model.
pub const PRECIPITATION_GRAVITY: f32 = 3.0;
/// Whole-field rotation about Y, radians per tick.
pub const PRECIPITATION_SPIN_PER_TICK: f32 = 0.002;
pub const MAX_PRECIPITATION_COUNT: u32 = 50_000;

// ---------------------------------------------------------------------------
// Cloud field
// ---------------------------------------------------------------------------

pub const CLOUD_CARD_SIZE: f32 = 500.0;
pub const CLOUD_HALF_SPREAD_X: f32 = 400.0;
pub const CLOUD_DEPTH_Z: f32 = 500.0;
pub const CLOUD_ALTITUDE: f32 = 500.0;
/// Fixed X/Y tilt shared by every card (matches the default camera pitch/yaw).
pub const CLOUD_TILT_X: f32 = 1.16;
pub const CLOUD_TILT_Y: f32 = -0.12;
pub const CLOUD_DRIFT_PER_TICK: f32 = 0.002;
/// Drift rate while bloom is active.
pub const CLOUD_DRIFT_PER_TICK_BLOOM: f32 = 0.001;
pub const MAX_CLOUD_COUNT: u32 = 500;

// ---------------------------------------------------------------------------
// Flash (lightning)
// ---------------------------------------------------------------------------

/// A uniform draw above this value triggers a new flash.
pub const FLASH_TRIGGER_CHANCE: f32 = 0.96;
/// Power above this keeps re-triggering; below it a trigger also relocates the light.
pub const FLASH_SUSTAIN_POWER: f32 = 100.0;
pub const FLASH_MIN_POWER: f32 = 50.0;
pub const FLASH_POWER_RANGE: f32 = 500.0;
/// Multiplicative per-tick decay of flash power.
pub const FLASH_DECAY_FACTOR: f32 = 0.93;
pub const FLASH_INITIAL_POSITION: [f32; 3] = [200.0, 300.0, 100.0];
pub const FLASH_BAND_WIDTH: f32 = 400.0;
pub const FLASH_BAND_MIN_Y: f32 = 300.0;
pub const FLASH_BAND_HEIGHT: f32 = 200.0;
pub const FLASH_BAND_Z: f32 = 100.0;

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

pub const DEFAULT_CLOUD_TEXTURE: &str = "textures/smoke.png";
pub const DEFAULT_MOON_TEXTURE: &str = "textures/moon.png";
/// Texture loads still pending after this long are treated as failed.
pub const TEXTURE_LOAD_TIMEOUT_SECS: f32 = 10.0;
