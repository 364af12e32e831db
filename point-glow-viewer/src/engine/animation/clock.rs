use bevy::prelude::*;

use constants::animation::ANIM_TIME_START;

/// Explicit per-frame animation clock. `elapsed` only ever grows except for
/// the pointer-down reset; `anim_time` is the eased blend clock the fly-in
/// controller writes and the material uniform update reads.
#[derive(Resource, Debug, Clone, Copy)]
pub struct AnimationState {
    pub elapsed: f32,
    pub anim_time: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            anim_time: ANIM_TIME_START,
        }
    }
}

/// Advance the clock by the frame delta. A slow frame is simply absorbed by
/// the next delta; there is no frame skipping or backpressure.
pub fn advance_animation_clock(time: Res<Time>, mut state: ResMut<AnimationState>) {
    state.elapsed += time.delta_secs();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_with_the_blend_fully_scattered() {
        let state = AnimationState::default();
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.anim_time, ANIM_TIME_START);
    }
}
