pub mod dot_texture;
pub mod labels;

use bevy::prelude::*;

use constants::camera::{
    CAMERA_ASPECT_RATIO, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR,
};

use crate::engine::animation::keyframes::FLY_IN_START;

/// Spawn the camera at the fly-in start pose. The point cloud and labels join
/// the scene once their assets are ready.
pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: CAMERA_ASPECT_RATIO,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }),
        Transform::from_translation(FLY_IN_START.position).with_rotation(FLY_IN_START.rotation),
    ));
}
