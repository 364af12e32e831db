use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};

use crate::engine::mesh::point_sprite_mesh::ATTRIBUTE_RND_POINT;

/// Uniform block shared by the glow vertex and fragment stages.
///
/// `time` is the raw elapsed clock; `anim_time` is the eased blend clock the
/// fly-in interpolates from 1.914 down to 0.0. The two are deliberately
/// separate uniforms: the scanline uses the raw clock while the scatter blend
/// uses the eased one.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct GlowParams {
    pub time: f32,
    pub anim_time: f32,
    pub point_size: f32,
    pub _padding: f32,
}

/// Additive point-sprite material for the glow cloud.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlowPointMaterial {
    #[uniform(0)]
    pub params: GlowParams,

    #[texture(1)]
    #[sampler(2)]
    pub dot_texture: Handle<Image>,
}

impl Material for GlowPointMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/point_glow.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/point_glow.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            ATTRIBUTE_RND_POINT.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Sprite quads face the camera by construction; nothing to cull.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
