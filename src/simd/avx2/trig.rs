//! AVX2 sine and cosine over 8 packed `f32` lanes.
//!
//! Same reduction, polynomials and sign handling as the portable lane-vector
//! path in `crate::trig`, issued as 256-bit intrinsics. No FMA is used so the
//! two paths round identically.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::LaneVector;
use crate::trig::consts::{
    COS_P0, COS_P1, COS_P2, DP1, DP2, DP3, FOPI, SIGN_MASK, SIGN_SHIFT, SIN_P0, SIN_P1, SIN_P2,
};
use crate::trig::portable;

/// Number of `f32` lanes in a 256-bit register.
pub const LANE_COUNT: usize = 8;

// Sign bits, octant index, cosine polynomial, sine polynomial.
struct Reduced {
    sign: __m256i,
    j: __m256i,
    cos_poly: __m256,
    sin_poly: __m256,
}

#[inline]
#[target_feature(enable = "avx,avx2")]
unsafe fn reduce(x: __m256) -> Reduced {
    let sign_mask = _mm256_set1_epi32(SIGN_MASK);

    let sign = _mm256_and_si256(_mm256_castps_si256(x), sign_mask);
    let x = _mm256_andnot_ps(_mm256_castsi256_ps(sign_mask), x);

    // j = trunc(|x| * 4/π); j += j & 1
    let j = _mm256_cvttps_epi32(_mm256_mul_ps(x, _mm256_set1_ps(FOPI)));
    let j = _mm256_add_epi32(j, _mm256_and_si256(j, _mm256_set1_epi32(1)));
    let y = _mm256_cvtepi32_ps(j);

    // Cody–Waite: x = ((x - y*DP1) - y*DP2) - y*DP3
    let x = _mm256_sub_ps(x, _mm256_mul_ps(y, _mm256_set1_ps(DP1)));
    let x = _mm256_sub_ps(x, _mm256_mul_ps(y, _mm256_set1_ps(DP2)));
    let x = _mm256_sub_ps(x, _mm256_mul_ps(y, _mm256_set1_ps(DP3)));
    let z = _mm256_mul_ps(x, x);

    let mut cos_poly = _mm256_set1_ps(COS_P0);
    cos_poly = _mm256_add_ps(_mm256_mul_ps(cos_poly, z), _mm256_set1_ps(COS_P1));
    cos_poly = _mm256_add_ps(_mm256_mul_ps(cos_poly, z), _mm256_set1_ps(COS_P2));
    cos_poly = _mm256_mul_ps(_mm256_mul_ps(cos_poly, z), z);
    cos_poly = _mm256_sub_ps(cos_poly, _mm256_mul_ps(z, _mm256_set1_ps(0.5)));
    cos_poly = _mm256_add_ps(cos_poly, _mm256_set1_ps(1.0));

    let mut sin_poly = _mm256_set1_ps(SIN_P0);
    sin_poly = _mm256_add_ps(_mm256_mul_ps(sin_poly, z), _mm256_set1_ps(SIN_P1));
    sin_poly = _mm256_add_ps(_mm256_mul_ps(sin_poly, z), _mm256_set1_ps(SIN_P2));
    sin_poly = _mm256_mul_ps(_mm256_mul_ps(sin_poly, z), x);
    sin_poly = _mm256_add_ps(sin_poly, x);

    Reduced {
        sign,
        j,
        cos_poly,
        sin_poly,
    }
}

// All-ones in lanes where bit 1 of j is set.
#[inline]
#[target_feature(enable = "avx,avx2")]
unsafe fn swap_mask(j: __m256i) -> __m256 {
    let two = _mm256_set1_epi32(2);
    _mm256_castsi256_ps(_mm256_cmpeq_epi32(_mm256_and_si256(j, two), two))
}

#[inline]
#[target_feature(enable = "avx,avx2")]
unsafe fn sin_of(r: &Reduced) -> __m256 {
    let poly = _mm256_blendv_ps(r.sin_poly, r.cos_poly, swap_mask(r.j));
    let octant = _mm256_and_si256(r.j, _mm256_set1_epi32(4));
    let octant_sign = _mm256_slli_epi32::<{ SIGN_SHIFT as i32 }>(octant);
    let sign = _mm256_xor_si256(r.sign, octant_sign);
    _mm256_xor_ps(poly, _mm256_castsi256_ps(sign))
}

#[inline]
#[target_feature(enable = "avx,avx2")]
unsafe fn cos_of(r: &Reduced) -> __m256 {
    let poly = _mm256_blendv_ps(r.cos_poly, r.sin_poly, swap_mask(r.j));
    let shifted = _mm256_sub_epi32(r.j, _mm256_set1_epi32(2));
    let octant = _mm256_andnot_si256(shifted, _mm256_set1_epi32(4));
    let sign = _mm256_slli_epi32::<{ SIGN_SHIFT as i32 }>(octant);
    _mm256_xor_ps(poly, _mm256_castsi256_ps(sign))
}

/// Computes the sine of 8 packed `f32` values.
///
/// # Safety
///
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx,avx2")]
pub unsafe fn _mm256_sin_ps(x: __m256) -> __m256 {
    sin_of(&reduce(x))
}

/// Computes the cosine of 8 packed `f32` values.
///
/// # Safety
///
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx,avx2")]
pub unsafe fn _mm256_cos_ps(x: __m256) -> __m256 {
    cos_of(&reduce(x))
}

/// Computes sine and cosine of 8 packed `f32` values from one reduction.
///
/// # Safety
///
/// The CPU must support AVX2.
#[inline]
#[target_feature(enable = "avx,avx2")]
pub unsafe fn _mm256_sincos_ps(x: __m256) -> (__m256, __m256) {
    let r = reduce(x);
    (sin_of(&r), cos_of(&r))
}

#[target_feature(enable = "avx,avx2")]
unsafe fn sin_blocks<const N: usize>(mut x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    for block in x.as_mut_array().chunks_exact_mut(LANE_COUNT) {
        let v = _mm256_loadu_ps(block.as_ptr());
        _mm256_storeu_ps(block.as_mut_ptr(), _mm256_sin_ps(v));
    }
    x
}

#[target_feature(enable = "avx,avx2")]
unsafe fn cos_blocks<const N: usize>(mut x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    for block in x.as_mut_array().chunks_exact_mut(LANE_COUNT) {
        let v = _mm256_loadu_ps(block.as_ptr());
        _mm256_storeu_ps(block.as_mut_ptr(), _mm256_cos_ps(v));
    }
    x
}

#[target_feature(enable = "avx,avx2")]
unsafe fn sincos_blocks<const N: usize>(
    x: LaneVector<f32, N>,
) -> (LaneVector<f32, N>, LaneVector<f32, N>) {
    let mut s = x;
    let mut c = x;

    for (s_block, c_block) in s
        .as_mut_array()
        .chunks_exact_mut(LANE_COUNT)
        .zip(c.as_mut_array().chunks_exact_mut(LANE_COUNT))
    {
        let (sin, cos) = _mm256_sincos_ps(_mm256_loadu_ps(s_block.as_ptr()));
        _mm256_storeu_ps(s_block.as_mut_ptr(), sin);
        _mm256_storeu_ps(c_block.as_mut_ptr(), cos);
    }

    (s, c)
}

// `cfg(avx2)` only says the build host had AVX2; the binary may run elsewhere.
// The detection result is cached by std after the first call.
#[inline(always)]
fn avx2_available() -> bool {
    is_x86_feature_detected!("avx2")
}

#[inline(always)]
pub(crate) fn sin<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    if N % LANE_COUNT != 0 || !avx2_available() {
        return portable::sin(x);
    }
    // SAFETY: `avx2_available` confirmed AVX2 at runtime.
    unsafe { sin_blocks(x) }
}

#[inline(always)]
pub(crate) fn cos<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    if N % LANE_COUNT != 0 || !avx2_available() {
        return portable::cos(x);
    }
    // SAFETY: `avx2_available` confirmed AVX2 at runtime.
    unsafe { cos_blocks(x) }
}

#[inline(always)]
pub(crate) fn sincos<const N: usize>(
    x: LaneVector<f32, N>,
) -> (LaneVector<f32, N>, LaneVector<f32, N>) {
    if N % LANE_COUNT != 0 || !avx2_available() {
        return portable::sincos(x);
    }
    // SAFETY: `avx2_available` confirmed AVX2 at runtime.
    unsafe { sincos_blocks(x) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> [f32; 8] {
        [-9.5, -3.0, -0.7, 0.0, 0.4, 1.6, 4.7, 30.0]
    }

    #[test]
    fn test_mm256_sin_matches_portable() {
        let x = inputs();
        let mut out = [0.0f32; 8];
        unsafe {
            let v = _mm256_loadu_ps(x.as_ptr());
            _mm256_storeu_ps(out.as_mut_ptr(), _mm256_sin_ps(v));
        }

        assert_eq!(out, portable::sin(LaneVector::from_array(x)).to_array());
    }

    #[test]
    fn test_mm256_cos_matches_portable() {
        let x = inputs();
        let mut out = [0.0f32; 8];
        unsafe {
            let v = _mm256_loadu_ps(x.as_ptr());
            _mm256_storeu_ps(out.as_mut_ptr(), _mm256_cos_ps(v));
        }

        assert_eq!(out, portable::cos(LaneVector::from_array(x)).to_array());
    }

    #[test]
    fn test_runtime_detection_agrees_with_std() {
        assert_eq!(avx2_available(), is_x86_feature_detected!("avx2"));
    }

    #[test]
    fn test_dispatch_matches_portable() {
        let x: LaneVector<f32, 8> = LaneVector::from_array(inputs());
        assert_eq!(sin(x), portable::sin(x));
        assert_eq!(cos(x), portable::cos(x));
    }

    #[test]
    fn test_sign_follows_octant() {
        // Octants 4..8 of sin and 2..6 of cos are negative.
        let x = [3.5f32, 4.0, 4.5, 5.0, 5.5, 6.0, -0.5, -1.0];
        let mut s = [0.0f32; 8];
        let mut c = [0.0f32; 8];
        unsafe {
            let (sv, cv) = _mm256_sincos_ps(_mm256_loadu_ps(x.as_ptr()));
            _mm256_storeu_ps(s.as_mut_ptr(), sv);
            _mm256_storeu_ps(c.as_mut_ptr(), cv);
        }

        for i in 0..8 {
            assert_eq!(s[i].is_sign_negative(), x[i].sin() < 0.0, "sin({})", x[i]);
            assert_eq!(c[i].is_sign_negative(), x[i].cos() < 0.0, "cos({})", x[i]);
        }
    }

    #[test]
    fn test_blocks_match_portable() {
        let x: LaneVector<f32, 24> =
            LaneVector::from_array(std::array::from_fn(|i| i as f32 * 0.61 - 7.0));

        assert_eq!(sin(x), portable::sin(x));
        assert_eq!(cos(x), portable::cos(x));
        assert_eq!(sincos(x), portable::sincos(x));
    }
}
