//! Vectorized sine and cosine for `f32` lane vectors.
//!
//! The approximation is the classic single-precision Cephes scheme:
//!
//! 1. Strip the sign bit and compute the octant index `j = trunc(|x| · 4/π)`,
//!    rounded up to the next even value.
//! 2. Reduce the argument with a three-part Cody–Waite split of π/4.
//! 3. Evaluate a minimax polynomial for `cos` and one for `sin` on
//!    `[-π/4, π/4]`.
//! 4. Pick the polynomial per lane from bit 1 of `j` and restore the sign by
//!    XOR-ing bits derived from bit 2 of `j` straight into the result.
//!
//! All three entry points share steps 1–3. For moderate inputs (a few
//! thousand radians) the error stays within a couple of `f32::EPSILON`.
//! NaN and infinity are not special-cased, and accuracy degrades for very
//! large magnitudes because the reduction is not exact there.
//!
//! When `build.rs` enables `cfg(avx2)` or `cfg(neon)`, lane vectors whose
//! width is a multiple of the register width are evaluated with the
//! intrinsic kernels in [`crate::simd`]; every other width uses the portable
//! lane-vector implementation. Both produce the same bits.
//!
//! # Examples
//!
//! ```rust
//! use lanemat::simd::{LaneVector, SimdTrig};
//!
//! let x = LaneVector::from_array([0.0f32, std::f32::consts::FRAC_PI_2]);
//! let (s, c) = x.sin_cos();
//!
//! assert!((s[1] - 1.0).abs() < 1e-6);
//! assert!((c[0] - 1.0).abs() < 1e-6);
//! ```

pub(crate) mod consts;
pub(crate) mod portable;
pub mod slice;

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
use crate::simd::avx2::trig as native;

#[cfg(all(neon, target_arch = "aarch64"))]
use crate::simd::neon::trig as native;

#[cfg(not(any(
    all(avx2, any(target_arch = "x86", target_arch = "x86_64")),
    all(neon, target_arch = "aarch64")
)))]
use self::portable as native;

use crate::simd::{LaneVector, SimdTrig};

/// Lane-wise sine.
#[inline(always)]
pub fn sin<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    native::sin(x)
}

/// Lane-wise cosine.
#[inline(always)]
pub fn cos<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    native::cos(x)
}

/// Lane-wise sine and cosine, computed from one range reduction.
#[inline(always)]
pub fn sincos<const N: usize>(x: LaneVector<f32, N>) -> (LaneVector<f32, N>, LaneVector<f32, N>) {
    native::sincos(x)
}

impl<const N: usize> SimdTrig for LaneVector<f32, N> {
    #[inline(always)]
    fn sin(self) -> Self {
        sin(self)
    }

    #[inline(always)]
    fn cos(self) -> Self {
        cos(self)
    }

    #[inline(always)]
    fn sin_cos(self) -> (Self, Self) {
        sincos(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quarter_periods() {
        let x = LaneVector::from_array([0.0f32, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
        let s = sin(x);
        let c = cos(x);

        let expected_sin = [0.0f32, 1.0, 0.0, -1.0];
        let expected_cos = [1.0f32, 0.0, -1.0, 0.0];
        for i in 0..4 {
            assert!((s[i] - expected_sin[i]).abs() < 1e-6, "sin lane {i}: {}", s[i]);
            assert!((c[i] - expected_cos[i]).abs() < 1e-6, "cos lane {i}: {}", c[i]);
        }
    }

    #[test]
    fn test_trait_matches_free_functions() {
        let x = LaneVector::from_array([-2.0f32, -0.5, 0.25, 1.0, 3.0, 7.5, 12.0, 40.0]);

        assert_eq!(x.sin(), sin(x));
        assert_eq!(x.cos(), cos(x));
        assert_eq!(x.sin_cos(), sincos(x));
    }

    #[test]
    fn test_native_matches_portable() {
        // 16 lanes reach the intrinsic kernels on AVX2 and NEON builds.
        let x: LaneVector<f32, 16> =
            LaneVector::from_array(std::array::from_fn(|i| (i as f32 - 8.0) * 1.37));

        assert_eq!(sin(x), portable::sin(x));
        assert_eq!(cos(x), portable::cos(x));
        assert_eq!(sincos(x), portable::sincos(x));
    }

    #[test]
    fn test_odd_width_uses_fallback() {
        let x = LaneVector::from_array([0.3f32, 1.1, -2.9]);
        assert_eq!(sin(x), portable::sin(x));
    }
}
