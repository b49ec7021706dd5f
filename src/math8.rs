//! Integer helpers for 8-bit channel math
//!
//! Everything here is exact: no floating point is involved, so results do not
//! depend on the target FPU.

/// Scale a channel by a brightness value: `round(value * brightness / 255)`.
///
/// The quotient never lands exactly on `.5`, so the rounding mode does not
/// matter here.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_round(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16 + 127) / 255) as u8
}

/// Divide rounding to the nearest integer, ties to even.
///
/// `denominator` must be positive.
#[inline]
pub const fn div_round_even(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let twice = remainder * 2;
    if twice > denominator || (twice == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Linear interpolation `round((b - a) * step / steps + a)`, ties to even.
///
/// Returns `a` when `steps` is zero.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub const fn lerp_round(a: u8, b: u8, step: usize, steps: usize) -> u8 {
    if steps == 0 {
        return a;
    }
    let steps = steps as i32;
    let step = step as i32;
    let a = a as i32;
    let b = b as i32;
    let value = div_round_even(a * steps + (b - a) * step, steps);
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
