//! Shaping functions shared by the packet motion code.

use rand::Rng;

/// Frames of life at which the ease curve reaches 1.
pub const EASE_SPAN: f32 = 200.0;

/// Ease-out-cubic, `1 - (1 - t)^3`.
///
/// Not clamped: for `t > 1` the result exceeds 1, so a packet moved by
/// `delta * k` lands past its target and is pulled back on the next frame.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Ease factor for a packet that has lived `life` frames.
#[inline]
pub fn packet_ease(life: u32, clamp: bool) -> f32 {
    let k = ease_out_cubic(life as f32 / EASE_SPAN);
    if clamp { k.clamp(0.0, 1.0) } else { k }
}

/// Uniform sample in `[-n/2, n/2]`.
#[inline]
pub fn jitter(n: f32, rng: &mut impl Rng) -> f32 {
    (rng.random::<f32>() - 0.5) * n
}
