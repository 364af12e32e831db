/// Logical size of the drawing surface in pixels (square viewport).
pub const VIEWPORT_SIZE: f32 = 600.0;

/// Clear colour behind the glow cloud (linear-ish deep blue).
pub const CLEAR_COLOR: [f32; 3] = [0.0, 0.1, 0.25];

/// Point sprites are sized `POINT_SPRITE_SCALE * (POINT_SPRITE_REFERENCE_DEPTH
/// / -view_z)` pixels, standard perspective point-sprite sizing.
pub const POINT_SPRITE_SCALE: f32 = 3.0;
pub const POINT_SPRITE_REFERENCE_DEPTH: f32 = 150.0;

/// Default edge length of the procedural dot sprite mask.
pub const DOT_TEXTURE_SIZE: u32 = 200;

/// Default half-extent of the per-point random displacement targets.
pub const DISPLACEMENT_RANGE: f32 = 1000.0;
