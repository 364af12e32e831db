/// Duration of the camera fly-in segment in seconds.
pub const FLY_IN_SECONDS: f32 = 5.0;

/// Duration of the hold segment after the fly-in. The timeline clamps at the
/// end of its final segment, so the hold effectively lasts forever.
pub const HOLD_SECONDS: f32 = 10.0;

/// Ordered segment durations for the demo timeline. Only the fly-in segment
/// does non-trivial work; the hold segment pins the terminal pose.
pub const SEGMENT_DURATIONS: [f32; 2] = [FLY_IN_SECONDS, HOLD_SECONDS];

/// Index of the fly-in segment within `SEGMENT_DURATIONS`.
pub const FLY_IN_SEGMENT: usize = 0;

/// Shader blend-clock value at the start of the fly-in. The vertex stage
/// feeds this through `sin(anim_time * 0.1 - x * 0.002)`, so 1.914 leaves the
/// cloud fully scattered toward its random targets.
pub const ANIM_TIME_START: f32 = 1.914;

/// Shader blend-clock value once the fly-in completes: points rest at their
/// modelled positions.
pub const ANIM_TIME_END: f32 = 0.0;

/// Per-frame mouse-look gain applied to the normalized cursor offset.
pub const MOUSE_LOOK_GAIN: f32 = 0.1;
