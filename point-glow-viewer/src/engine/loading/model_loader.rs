use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy::render::view::NoFrustumCulling;
use rand::thread_rng;

use constants::animation::ANIM_TIME_START;
use constants::render_settings::POINT_SPRITE_SCALE;

use crate::engine::assets::point_cloud_assets::PointCloudAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::error::SceneError;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::displacement::DisplacementField;
use crate::engine::mesh::point_sprite_mesh::{PointCloud, build_point_sprite_mesh};
use crate::engine::scene::dot_texture::create_dot_texture;
use crate::engine::shaders::{GlowParams, GlowPointMaterial};

/// Once the glTF is in memory, turn its first primitive into the sprite mesh,
/// generate the displacement field, and spawn the cloud with the glow
/// material. Runs once; a rejected model is logged and the demo carries on
/// with an empty scene.
pub fn build_point_cloud_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut assets: ResMut<PointCloudAssets>,
    manifest: Option<Res<SceneManifest>>,
    gltfs: Res<Assets<Gltf>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<GlowPointMaterial>>,
) {
    if loading_progress.point_cloud_created || !loading_progress.manifest_loaded {
        return;
    }

    let Some(manifest) = manifest else {
        return;
    };
    let Some(model_handle) = &assets.model else {
        return;
    };
    let Some(gltf) = gltfs.get(model_handle) else {
        return;
    };

    let positions = match extract_point_positions(gltf, &gltf_meshes, &meshes) {
        Ok(positions) => positions,
        Err(err) => {
            error!("Point cloud rejected: {err}");
            loading_progress.point_cloud_created = true;
            return;
        }
    };

    info!("✓ Model loaded with {} points", positions.len());

    let field = DisplacementField::generate(
        positions.len(),
        manifest.displacement_range,
        &mut thread_rng(),
    );
    let sprite_mesh = build_point_sprite_mesh(&positions, &field);

    let dot_texture = images.add(create_dot_texture(manifest.dot_texture_size));
    let material_handle = materials.add(GlowPointMaterial {
        params: GlowParams {
            time: 0.0,
            anim_time: ANIM_TIME_START,
            point_size: POINT_SPRITE_SCALE,
            _padding: 0.0,
        },
        dot_texture,
    });
    assets.material = Some(material_handle.clone());

    commands.spawn((
        Mesh3d(meshes.add(sprite_mesh)),
        MeshMaterial3d(material_handle),
        Transform::from_translation(Vec3::Y * manifest.model.offset_y),
        PointCloud,
        // Vertex-stage displacement moves points far outside the source
        // bounds, so culling against them would drop the whole cloud.
        NoFrustumCulling,
    ));

    loading_progress.point_cloud_created = true;
    info!("Point cloud entity spawned");
}

/// Pull per-point positions out of the glTF's first mesh primitive.
fn extract_point_positions(
    gltf: &Gltf,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Result<Vec<Vec3>, SceneError> {
    let mesh_handle = gltf.meshes.first().ok_or(SceneError::MissingPointMesh)?;
    let gltf_mesh = gltf_meshes
        .get(mesh_handle)
        .ok_or(SceneError::MissingPointMesh)?;
    let primitive = gltf_mesh
        .primitives
        .first()
        .ok_or(SceneError::MissingPointMesh)?;
    let mesh = meshes
        .get(&primitive.mesh)
        .ok_or(SceneError::MissingPointMesh)?;

    match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(values)) => {
            Ok(values.iter().copied().map(Vec3::from_array).collect())
        }
        Some(_) => Err(SceneError::UnexpectedPositionFormat),
        None => Err(SceneError::MissingPositions),
    }
}
