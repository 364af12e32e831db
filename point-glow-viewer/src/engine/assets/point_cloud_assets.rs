use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::shaders::GlowPointMaterial;

/// Handles for everything loaded or created for the glow cloud. The material
/// handle is how the animation systems reach the shader uniforms each frame.
#[derive(Resource, Default)]
pub struct PointCloudAssets {
    pub manifest: Option<Handle<SceneManifest>>,
    pub model: Option<Handle<Gltf>>,
    pub material: Option<Handle<GlowPointMaterial>>,
}
