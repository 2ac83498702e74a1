//! Texture loading for the textured scene elements (cloud cards, moon).
//!
//! A build queues a `TextureRequest` per element, stamped with its scene
//! generation. `poll_texture_loads` drives them through the `AssetServer` and
//! emits one `TextureResolved` per request, success or failure. Resolutions
//! are only applied while their generation is still the live one; anything
//! older is dropped without touching the scene.

use bevy::asset::LoadState;
use bevy::prelude::*;

use simulation::config::TEXTURE_LOAD_TIMEOUT_SECS;
use simulation::generation::SceneGeneration;

use crate::frame_driver::FrameDriver;
use crate::lifecycle::{spawn_clouds, spawn_moon, SceneHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Cloud,
    Moon,
}

impl TextureKind {
    pub fn name(self) -> &'static str {
        match self {
            TextureKind::Cloud => "cloud",
            TextureKind::Moon => "moon",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextureRequest {
    pub generation: u64,
    pub kind: TextureKind,
    pub path: String,
    pub handle: Option<Handle<Image>>,
    /// Seconds spent waiting so far.
    pub waited: f32,
}

/// Outstanding texture loads of the live generation.
#[derive(Resource, Debug, Default)]
pub struct TextureLoads {
    pending: Vec<TextureRequest>,
}

impl TextureLoads {
    pub fn request(&mut self, generation: u64, kind: TextureKind, path: impl Into<String>) {
        self.pending.push(TextureRequest {
            generation,
            kind,
            path: path.into(),
            handle: None,
            waited: 0.0,
        });
    }

    pub fn pending(&self) -> &[TextureRequest] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Outcome of one texture request. `image` is `None` when the load failed
/// or timed out.
#[derive(Event, Debug, Clone)]
pub struct TextureResolved {
    pub generation: u64,
    pub kind: TextureKind,
    pub image: Option<Handle<Image>>,
}

pub fn poll_texture_loads(
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    mut loads: ResMut<TextureLoads>,
    mut resolved: EventWriter<TextureResolved>,
) {
    let dt = time.delta_secs();
    loads.pending.retain_mut(|request| {
        let handle = request
            .handle
            .get_or_insert_with(|| asset_server.load::<Image>(request.path.clone()))
            .clone();

        let outcome = match asset_server.get_load_state(&handle) {
            Some(LoadState::Loaded) => Some(Some(handle)),
            Some(LoadState::Failed(err)) => {
                warn!(
                    "Failed to load {} texture '{}': {}",
                    request.kind.name(),
                    request.path,
                    err
                );
                Some(None)
            }
            _ => {
                request.waited += dt;
                if request.waited >= TEXTURE_LOAD_TIMEOUT_SECS {
                    warn!(
                        "Timed out after {:.0}s loading {} texture '{}'",
                        request.waited,
                        request.kind.name(),
                        request.path
                    );
                    Some(None)
                } else {
                    None
                }
            }
        };

        match outcome {
            Some(image) => {
                resolved.send(TextureResolved {
                    generation: request.generation,
                    kind: request.kind,
                    image,
                });
                false
            }
            None => true,
        }
    });
}

/// Apply one resolution to the live scene. Returns `false` when it belonged
/// to an older generation and was discarded.
pub fn attach_texture(world: &mut World, resolved: TextureResolved) -> bool {
    let live = world.resource::<SceneGeneration>().current();
    let handle = world.resource::<SceneHandle>();
    if resolved.generation != live || handle.generation != live || handle.settings.is_none() {
        debug!(
            "Discarding {} texture for stale generation {} (live {})",
            resolved.kind.name(),
            resolved.generation,
            live
        );
        return false;
    }

    match resolved.kind {
        TextureKind::Cloud => {
            if handle.clouds_resolved {
                return false;
            }
            match resolved.image {
                Some(image) => spawn_clouds(world, image),
                None => warn!("Cloud texture unavailable; scene runs without clouds"),
            }
            world.resource_mut::<SceneHandle>().clouds_resolved = true;
            world.resource_mut::<FrameDriver>().start();
        }
        TextureKind::Moon => {
            if handle.moon.is_some() {
                return false;
            }
            match resolved.image {
                Some(image) => spawn_moon(world, image),
                None => warn!("Moon texture unavailable; scene runs without the moon"),
            }
        }
    }
    true
}

/// Exclusive system: apply every texture resolution received this frame.
pub fn attach_resolved_textures(world: &mut World) {
    let resolved: Vec<TextureResolved> = world
        .resource_mut::<Events<TextureResolved>>()
        .drain()
        .collect();
    for r in resolved {
        attach_texture(world, r);
    }
}
