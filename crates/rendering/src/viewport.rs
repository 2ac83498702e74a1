use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::lifecycle::SceneHandle;

/// Current host surface size in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

pub fn init_viewport(windows: Query<&Window, With<PrimaryWindow>>, mut viewport: ResMut<Viewport>) {
    if let Ok(window) = windows.get_single() {
        viewport.width = window.width();
        viewport.height = window.height();
    }
}

/// Keep the live camera's aspect ratio in step with the window. Does not
/// rebuild the scene.
pub fn handle_window_resized(
    mut events: EventReader<WindowResized>,
    handle: Res<SceneHandle>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    viewport.width = last.width;
    viewport.height = last.height;

    let Some(camera) = handle.camera else {
        return;
    };
    if let Ok(mut projection) = projections.get_mut(camera) {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.aspect();
        }
    }
}
