// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers.

/// Position of `value` between `a` (0) and `b` (1), clamped to `[0, 1]`.
///
/// `a` may be greater than `b`, which maps a descending range onto `[0, 1]`.
/// A degenerate range (`a == b`) and NaN results yield 0.
#[inline]
pub(crate) fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    let t = (value - a) / (b - a);
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::inverse_lerp;

    #[test]
    fn ascending_and_descending_ranges() {
        assert_eq!(inverse_lerp(0.0, 2.0, 1.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 0.0, 1.5), 0.25);
        assert_eq!(inverse_lerp(1.0, 0.1, 1.0), 0.0);
        assert_eq!(inverse_lerp(1.0, 0.1, 0.1), 1.0);
    }

    #[test]
    fn clamps_outside_range() {
        assert_eq!(inverse_lerp(1.0, 0.1, 5.0), 0.0);
        assert_eq!(inverse_lerp(1.0, 0.1, -3.0), 1.0);
        assert_eq!(inverse_lerp(1.0, 0.1, f32::INFINITY), 0.0);
    }

    #[test]
    fn degenerate_and_nan() {
        assert_eq!(inverse_lerp(1.0, 1.0, 0.0), 0.0);
        assert_eq!(inverse_lerp(0.0, 1.0, f32::NAN), 0.0);
        assert_eq!(inverse_lerp(f32::INFINITY, 0.0, f32::INFINITY), 0.0);
    }
}
