use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::animation::{ANIM_TIME_END, ANIM_TIME_START, FLY_IN_SEGMENT, MOUSE_LOOK_GAIN};

use crate::engine::animation::clock::AnimationState;
use crate::engine::animation::ease::{lerp, smoothstep};
use crate::engine::animation::keyframes::{CameraKeyframe, FLY_IN_END, FLY_IN_START};
use crate::engine::animation::segments::SegmentTimeline;
use crate::engine::assets::point_cloud_assets::PointCloudAssets;
use crate::engine::shaders::GlowPointMaterial;

/// Latest cursor position normalized to `[0, 1]` within the window.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerPosition {
    pub normalized: Vec2,
}

pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut pointer: ResMut<PointerPosition>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    for cursor in cursor_moved.read() {
        pointer.normalized = cursor.position / Vec2::new(window.width(), window.height());
    }
}

/// The per-frame controller. While the fly-in segment is active, eased local
/// progress drives both the shader blend clock (1.914 down to 0.0) and the
/// camera pose between the two fixed keyframes; afterwards the terminal
/// values stay pinned. The camera transform write marks it changed, so the
/// renderer recomputes its world matrix before the draw.
pub fn drive_fly_in(
    timeline: Res<SegmentTimeline>,
    mut state: ResMut<AnimationState>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let sample = timeline.sample(state.elapsed);
    let t = if sample.index == FLY_IN_SEGMENT {
        smoothstep(sample.progress)
    } else {
        1.0
    };

    state.anim_time = lerp(ANIM_TIME_START, ANIM_TIME_END, t);

    let pose = CameraKeyframe::sample(&FLY_IN_START, &FLY_IN_END, t);
    if let Ok(mut camera_transform) = cameras.single_mut() {
        camera_transform.translation = pose.position;
        camera_transform.rotation = pose.rotation;
    }
}

/// Mouse-driven look: the normalized cursor offset from the window center
/// applies a small local yaw/pitch on top of whatever the fly-in wrote this
/// frame. Two rotation sources compose additively per frame.
pub fn apply_mouse_look(
    pointer: Res<PointerPosition>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    camera_transform.rotate_local_y(MOUSE_LOOK_GAIN * (pointer.normalized.x - 0.5));
    camera_transform.rotate_local_x(MOUSE_LOOK_GAIN * (pointer.normalized.y - 0.5));
}

/// Pointer-down rewinds the clock and replays the fly-in from the start.
pub fn reset_on_pointer_down(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut state: ResMut<AnimationState>,
) {
    if mouse_button.just_pressed(MouseButton::Left) {
        state.elapsed = 0.0;
        info!("Animation clock reset, replaying fly-in");
    }
}

/// Debug helper: dump the camera pose so new keyframes can be captured by
/// flying somewhere and pressing P.
pub fn debug_camera_log(
    keyboard: Res<ButtonInput<KeyCode>>,
    cameras: Query<&Transform, With<Camera3d>>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        if let Ok(camera_transform) = cameras.single() {
            info!(
                "Camera position: {:?} rotation: {:?}",
                camera_transform.translation, camera_transform.rotation
            );
        }
    }
}

/// Push the frame's clock values into the glow material: `time` gets the raw
/// elapsed seconds, `anim_time` the eased blend clock.
pub fn update_glow_uniforms(
    state: Res<AnimationState>,
    assets: Res<PointCloudAssets>,
    mut materials: ResMut<Assets<GlowPointMaterial>>,
) {
    let Some(handle) = &assets.material else {
        return;
    };

    if let Some(material) = materials.get_mut(handle) {
        material.params.time = state.elapsed;
        material.params.anim_time = state.anim_time;
    }
}
