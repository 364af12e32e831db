use bevy::prelude::*;

/// Fly-in start pose: looking at the cloud from down the +X axis.
pub const FLY_IN_START_POSITION: Vec3 = Vec3::new(200.0, 0.0, 0.0);
pub const FLY_IN_START_ROTATION: Quat =
    Quat::from_xyzw(0.0, 0.7071067811865476, 0.0, 0.7071067811865476);

/// Fly-in end pose: raised three-quarter view over the cloud.
pub const FLY_IN_END_POSITION: Vec3 = Vec3::new(137.21, 61.17, -16.68);
pub const FLY_IN_END_ROTATION: Quat = Quat::from_xyzw(
    -0.044043449956680664,
    0.8651926590903987,
    0.07721638771201698,
    0.4934971799723947,
);

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 5000.0;
pub const CAMERA_ASPECT_RATIO: f32 = 1.0;
