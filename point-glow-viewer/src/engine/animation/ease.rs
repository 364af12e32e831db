/// Hermite smoothstep on already-normalized input: `t * t * (3 - 2t)`.
/// Callers clamp `t` to `[0, 1]` before easing.
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend between `a` and `b` at parameter `k`.
pub fn lerp(a: f32, b: f32, k: f32) -> f32 {
    a + (b - a) * k
}
