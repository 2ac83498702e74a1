use bevy::core_pipeline::bloom::Bloom;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use simulation::cloud::scatter_clouds;
use simulation::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CLOUD_CARD_SIZE};
use simulation::flash::FlashState;
use simulation::precipitation::PrecipitationField;
use simulation::scene_config::SceneConfig;
use simulation::scene_rng::SceneRng;
use simulation::settings::{SceneColor, SceneSettings};

use super::{SceneHandle, SceneMember};
use crate::frame_driver::FrameDriver;
use crate::precipitation_mesh::{precipitation_mesh, PrecipitationSprite};
use crate::textures::{TextureKind, TextureLoads};
use crate::viewport::Viewport;

/// Ambient brightness (cd/m^2) per unit of `ambientLightIntensity`.
const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;
/// Sun illuminance (lux) per unit of `directionalLightIntensity`.
const SUN_LUX_PER_UNIT: f32 = 2_000.0;
const AMBIENT_COLOR: SceneColor = SceneColor(0x555555);
const SUN_COLOR: SceneColor = SceneColor(0xffeedd);
const SUN_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.0);

const MOON_SIZE: f32 = 80.0;
const MOON_POSITION: Vec3 = Vec3::new(150.0, 700.0, -350.0);

pub(super) fn build_scene(
    world: &mut World,
    settings: &SceneSettings,
    generation: u64,
) -> SceneHandle {
    let member = SceneMember { generation };
    let mut handle = SceneHandle {
        generation,
        settings: Some(settings.clone()),
        ..Default::default()
    };

    world.insert_resource(ClearColor(settings.sky_color.to_color()));
    world.insert_resource(AmbientLight {
        color: AMBIENT_COLOR.to_color(),
        brightness: settings.ambient_light_intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
    });

    handle.camera = Some(spawn_camera(world, settings, member));

    handle.sun = Some(
        world
            .spawn((
                DirectionalLight {
                    color: SUN_COLOR.to_color(),
                    illuminance: settings.directional_light_intensity * SUN_LUX_PER_UNIT,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
                member,
            ))
            .id(),
    );

    let flash = FlashState::from_settings(settings);
    handle.flash = Some(
        world
            .spawn((
                PointLight {
                    color: settings.flash_color.to_color(),
                    intensity: flash.lumens(),
                    range: settings.flash_distance,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(flash.position),
                flash,
                member,
            ))
            .id(),
    );

    if settings.precipitation_count > 0 {
        spawn_precipitation(world, settings, member, &mut handle);
    }

    let config = world.get_resource::<SceneConfig>().cloned().unwrap_or_default();
    let mut loads = world.resource_mut::<TextureLoads>();
    if settings.cloud_count > 0 {
        loads.request(generation, TextureKind::Cloud, config.cloud_texture);
    }
    if settings.moon_visible {
        loads.request(generation, TextureKind::Moon, config.moon_texture);
    }

    // Nothing to wait for without clouds.
    if settings.cloud_count == 0 {
        handle.clouds_resolved = true;
        world.resource_mut::<FrameDriver>().start();
    }

    handle
}

fn camera_transform(settings: &SceneSettings) -> Transform {
    let [x, y, z] = settings.camera_rotation;
    Transform::from_translation(Vec3::from_array(settings.camera_position))
        .with_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z))
}

fn spawn_camera(world: &mut World, settings: &SceneSettings, member: SceneMember) -> Entity {
    let aspect_ratio = world
        .get_resource::<Viewport>()
        .copied()
        .unwrap_or_default()
        .aspect();

    let mut camera = world.spawn((
        Camera3d::default(),
        Camera {
            hdr: settings.bloom,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect_ratio,
        }),
        camera_transform(settings),
        DistanceFog {
            color: settings.sky_color.to_color(),
            falloff: FogFalloff::ExponentialSquared {
                density: settings.fog_density,
            },
            ..default()
        },
        member,
    ));
    if settings.bloom {
        camera.insert(Bloom::NATURAL);
    }
    camera.id()
}

fn spawn_precipitation(
    world: &mut World,
    settings: &SceneSettings,
    member: SceneMember,
    handle: &mut SceneHandle,
) {
    let field = {
        let mut rng = world.resource_mut::<SceneRng>();
        PrecipitationField::seed(
            settings.precipitation_count as usize,
            settings.fall_model(),
            &mut rng.0,
        )
    };
    let mesh = world
        .resource_mut::<Assets<Mesh>>()
        .add(precipitation_mesh(&field, settings.precipitation_size));
    let material = world
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color: settings.precipitation_color.to_color(),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        });

    let entity = world
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            // Vertices move every tick; the spawn-time bounds would go stale.
            NoFrustumCulling,
            PrecipitationSprite {
                size: settings.precipitation_size,
            },
            field,
            member,
        ))
        .id();

    handle.precipitation = Some(entity);
    handle.precipitation_mesh = Some(mesh.clone());
    handle.meshes.push(mesh);
    handle.materials.push(material);
}

/// Spawn the cloud layer for the live generation using a resolved texture.
pub(crate) fn spawn_clouds(world: &mut World, image: Handle<Image>) {
    let Some(settings) = world.resource::<SceneHandle>().settings.clone() else {
        return;
    };
    let member = SceneMember {
        generation: world.resource::<SceneHandle>().generation,
    };

    let cards = {
        let mut rng = world.resource_mut::<SceneRng>();
        scatter_clouds(settings.cloud_count as usize, &mut rng.0)
    };
    let mesh = world
        .resource_mut::<Assets<Mesh>>()
        .add(Rectangle::new(CLOUD_CARD_SIZE, CLOUD_CARD_SIZE));
    let material = world
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color: settings.cloud_tint.to_color_with_alpha(settings.cloud_opacity),
            base_color_texture: Some(image),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 1.0,
            reflectance: 0.0,
            cull_mode: None,
            double_sided: true,
            ..default()
        });

    let entities: Vec<Entity> = cards
        .into_iter()
        .map(|card| {
            world
                .spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(card.position).with_rotation(card.rotation()),
                    card,
                    member,
                ))
                .id()
        })
        .collect();

    let mut handle = world.resource_mut::<SceneHandle>();
    handle.clouds.extend(entities);
    handle.meshes.push(mesh);
    handle.materials.push(material);
}

pub(crate) fn spawn_moon(world: &mut World, image: Handle<Image>) {
    let Some(settings) = world.resource::<SceneHandle>().settings.clone() else {
        return;
    };
    let member = SceneMember {
        generation: world.resource::<SceneHandle>().generation,
    };

    let mesh = world
        .resource_mut::<Assets<Mesh>>()
        .add(Rectangle::new(MOON_SIZE, MOON_SIZE));
    let material = world
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color_texture: Some(image),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        });
    let camera = Vec3::from_array(settings.camera_position);
    let entity = world
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(MOON_POSITION).looking_at(camera, Vec3::Y),
            member,
        ))
        .id();

    let mut handle = world.resource_mut::<SceneHandle>();
    handle.moon = Some(entity);
    handle.meshes.push(mesh);
    handle.materials.push(material);
}
