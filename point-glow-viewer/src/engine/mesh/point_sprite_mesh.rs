use bevy::prelude::*;
use bevy::render::mesh::{
    Indices, MeshVertexAttribute, PrimitiveTopology, VertexAttributeValues,
};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::VertexFormat;

use crate::engine::mesh::displacement::DisplacementField;

#[derive(Component)]
pub struct PointCloud;

/// Per-corner copy of the point's random scatter target, consumed by the glow
/// vertex stage.
pub const ATTRIBUTE_RND_POINT: MeshVertexAttribute =
    MeshVertexAttribute::new("RndPoint", 988_540_917, VertexFormat::Float32x3);

/// Corner UVs for one sprite quad; the vertex stage maps these to clip-space
/// corner offsets and the fragment stage samples the dot mask with them.
const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Build a camera-facing sprite quad per point: four vertices all carrying the
/// point's position plus a corner UV, expanded to screen-aligned quads in the
/// vertex stage. WebGPU has no point size, so point sprites are done as
/// GPU-side quad expansion.
pub fn build_point_sprite_mesh(positions: &[Vec3], field: &DisplacementField) -> Mesh {
    let point_count = positions.len();

    let mut corner_positions: Vec<[f32; 3]> = Vec::with_capacity(point_count * 4);
    let mut corner_uvs: Vec<[f32; 2]> = Vec::with_capacity(point_count * 4);
    let mut corner_targets: Vec<[f32; 3]> = Vec::with_capacity(point_count * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(point_count * 6);

    for (i, position) in positions.iter().enumerate() {
        let target = field.target(i);
        for uv in CORNER_UVS {
            corner_positions.push(position.to_array());
            corner_uvs.push(uv);
            corner_targets.push(target);
        }

        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, corner_positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corner_uvs);
    mesh.insert_attribute(
        ATTRIBUTE_RND_POINT,
        VertexAttributeValues::Float32x3(corner_targets),
    );
    mesh.insert_indices(Indices::U32(indices));

    mesh
}
