use bevy::prelude::*;

use constants::camera::{
    FLY_IN_END_POSITION, FLY_IN_END_ROTATION, FLY_IN_START_POSITION, FLY_IN_START_ROTATION,
};

/// A camera pose: position plus unit-quaternion orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraKeyframe {
    pub position: Vec3,
    pub rotation: Quat,
}

pub const FLY_IN_START: CameraKeyframe =
    CameraKeyframe::new(FLY_IN_START_POSITION, FLY_IN_START_ROTATION);
pub const FLY_IN_END: CameraKeyframe =
    CameraKeyframe::new(FLY_IN_END_POSITION, FLY_IN_END_ROTATION);

impl CameraKeyframe {
    pub const fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Interpolate between two poses: linear for position, spherical-linear
    /// for orientation. `t` outside `[0, 1]` pins to the nearer endpoint, so
    /// the boundary poses are reproduced exactly.
    pub fn sample(start: &Self, end: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *start;
        }
        if t >= 1.0 {
            return *end;
        }
        Self {
            position: start.position.lerp(end.position, t),
            rotation: start.rotation.slerp(end.rotation, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_at_zero_is_exactly_the_start_pose() {
        let pose = CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, 0.0);
        assert_eq!(pose, FLY_IN_START);
    }

    #[test]
    fn sample_at_one_is_exactly_the_end_pose() {
        let pose = CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, 1.0);
        assert_eq!(pose, FLY_IN_END);
    }

    #[test]
    fn sample_clamps_outside_the_unit_interval() {
        assert_eq!(
            CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, -0.5),
            FLY_IN_START
        );
        assert_eq!(
            CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, 7.0),
            FLY_IN_END
        );
    }

    #[test]
    fn interpolated_orientation_stays_unit_length() {
        for step in 0..=20 {
            let t = step as f32 / 20.0;
            let pose = CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, t);
            assert_relative_eq!(pose.rotation.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn keyframe_constants_hold_unit_quaternions() {
        assert_relative_eq!(FLY_IN_START.rotation.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(FLY_IN_END.rotation.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn midpoint_position_is_the_linear_blend() {
        let pose = CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, 0.5);
        let expected = (FLY_IN_START.position + FLY_IN_END.position) * 0.5;
        assert_relative_eq!(pose.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(pose.position.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(pose.position.z, expected.z, epsilon = 1e-4);
    }
}
