//! Sign and saturating-magnitude helpers for integer distance fields.
//!
//! Classification labels use the extremes of `i32` as "infinitely far"
//! markers. `|i32::MIN|` does not fit in `i32`, so magnitudes are taken in
//! `i64` and clamped back before they are written to a channel.

/// Largest magnitude a neighbour may contribute to a distance update.
///
/// One step is added on top, so the result never exceeds `i32::MAX`.
pub const MAX_NEIGHBOR_DISTANCE: i64 = i32::MAX as i64 - 1;

/// Sign of `v` as `-1`, `0` or `1`.
#[inline]
pub const fn sign(v: i32) -> i32 {
    (v > 0) as i32 - (v < 0) as i32
}

/// Sign of an integer label as a real factor.
#[inline]
pub const fn sign_f32(v: i32) -> f32 {
    sign(v) as f32
}

/// `|v|` clamped to `i32::MAX`.
#[inline]
pub const fn saturating_magnitude(v: i32) -> i64 {
    let m = (v as i64).abs();
    if m > i32::MAX as i64 {
        i32::MAX as i64
    } else {
        m
    }
}

/// `|v|` clamped to [`MAX_NEIGHBOR_DISTANCE`].
#[inline]
pub const fn neighbor_magnitude(v: i32) -> i64 {
    let m = (v as i64).abs();
    if m > MAX_NEIGHBOR_DISTANCE {
        MAX_NEIGHBOR_DISTANCE
    } else {
        m
    }
}

/// Relax a signed distance against the closest neighbour distance.
///
/// Returns `sign(current) * min(|current|, closest + 1)`, where `closest` is
/// `None` when no neighbour exists. Zero stays zero.
#[inline]
pub fn relax_signed_distance(current: i32, closest: Option<i64>) -> i32 {
    let closest = match closest {
        Some(d) if d < MAX_NEIGHBOR_DISTANCE => d,
        _ => MAX_NEIGHBOR_DISTANCE,
    };
    let magnitude = saturating_magnitude(current).min(closest + 1);
    // magnitude <= i32::MAX, so the product always fits
    (sign(current) as i64 * magnitude) as i32
}
