use bevy::prelude::*;

/// Monotonic id of the current scene build.
///
/// Every rebuild advances it. Work started for an older generation (texture
/// loads in particular) compares its id against this before touching the
/// scene and is dropped on mismatch.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneGeneration(pub u64);

impl SceneGeneration {
    /// Move to the next generation and return its id.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}
