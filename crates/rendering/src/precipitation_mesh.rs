//! Mesh representation of a precipitation field: one quad per particle.
//!
//! Topology and indices are written once at build time; each tick only the
//! position attribute is replaced.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use simulation::precipitation::PrecipitationField;

/// Edge length of each particle quad, from `precipitationSize`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PrecipitationSprite {
    pub size: f32,
}

pub fn precipitation_mesh(field: &PrecipitationField, size: f32) -> Mesh {
    let quads = field.len();
    // MAIN_WORLD keeps the vertex data around so it can be rewritten per tick.
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, quad_positions(field, size));
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; quads * 4]);
    mesh.insert_indices(Indices::U32(quad_indices(quads)));
    mesh
}

pub fn write_positions(mesh: &mut Mesh, field: &PrecipitationField, size: f32) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, quad_positions(field, size));
}

fn quad_positions(field: &PrecipitationField, size: f32) -> Vec<[f32; 3]> {
    let h = size * 0.5;
    let mut out = Vec::with_capacity(field.len() * 4);
    for p in &field.positions {
        out.push([p.x - h, p.y - h, p.z]);
        out.push([p.x + h, p.y - h, p.z]);
        out.push([p.x + h, p.y + h, p.z]);
        out.push([p.x - h, p.y + h, p.z]);
    }
    out
}

fn quad_indices(quads: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(quads * 6);
    for q in 0..quads as u32 {
        let base = q * 4;
        out.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    out
}
