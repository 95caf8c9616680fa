//! NEON sine and cosine over 4 packed `f32` lanes.
//!
//! Mirrors `simd::avx2::trig` and the portable path step for step; `vmlsq`
//! style fused forms are avoided so every backend rounds identically.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::LaneVector;
use crate::trig::consts::{
    COS_P0, COS_P1, COS_P2, DP1, DP2, DP3, FOPI, SIGN_MASK, SIGN_SHIFT, SIN_P0, SIN_P1, SIN_P2,
};
use crate::trig::portable;

/// Number of `f32` lanes in a 128-bit register.
pub const LANE_COUNT: usize = 4;

struct Reduced {
    sign: int32x4_t,
    j: int32x4_t,
    cos_poly: float32x4_t,
    sin_poly: float32x4_t,
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn reduce(x: float32x4_t) -> Reduced {
    let sign = vandq_s32(vreinterpretq_s32_f32(x), vdupq_n_s32(SIGN_MASK));
    let x = vabsq_f32(x);

    // vcvtq truncates toward zero and saturates, like `as`.
    let j = vcvtq_s32_f32(vmulq_n_f32(x, FOPI));
    let j = vaddq_s32(j, vandq_s32(j, vdupq_n_s32(1)));
    let y = vcvtq_f32_s32(j);

    let x = vsubq_f32(x, vmulq_n_f32(y, DP1));
    let x = vsubq_f32(x, vmulq_n_f32(y, DP2));
    let x = vsubq_f32(x, vmulq_n_f32(y, DP3));
    let z = vmulq_f32(x, x);

    let mut cos_poly = vdupq_n_f32(COS_P0);
    cos_poly = vaddq_f32(vmulq_f32(cos_poly, z), vdupq_n_f32(COS_P1));
    cos_poly = vaddq_f32(vmulq_f32(cos_poly, z), vdupq_n_f32(COS_P2));
    cos_poly = vmulq_f32(vmulq_f32(cos_poly, z), z);
    cos_poly = vsubq_f32(cos_poly, vmulq_n_f32(z, 0.5));
    cos_poly = vaddq_f32(cos_poly, vdupq_n_f32(1.0));

    let mut sin_poly = vdupq_n_f32(SIN_P0);
    sin_poly = vaddq_f32(vmulq_f32(sin_poly, z), vdupq_n_f32(SIN_P1));
    sin_poly = vaddq_f32(vmulq_f32(sin_poly, z), vdupq_n_f32(SIN_P2));
    sin_poly = vmulq_f32(vmulq_f32(sin_poly, z), x);
    sin_poly = vaddq_f32(sin_poly, x);

    Reduced {
        sign,
        j,
        cos_poly,
        sin_poly,
    }
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn with_sign(poly: float32x4_t, sign: int32x4_t) -> float32x4_t {
    vreinterpretq_f32_s32(veorq_s32(vreinterpretq_s32_f32(poly), sign))
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn sin_of(r: &Reduced) -> float32x4_t {
    let swap = vtstq_s32(r.j, vdupq_n_s32(2));
    let poly = vbslq_f32(swap, r.cos_poly, r.sin_poly);
    let octant_sign = vshlq_n_s32::<{ SIGN_SHIFT as i32 }>(vandq_s32(r.j, vdupq_n_s32(4)));
    with_sign(poly, veorq_s32(r.sign, octant_sign))
}

#[inline]
#[target_feature(enable = "neon")]
unsafe fn cos_of(r: &Reduced) -> float32x4_t {
    let swap = vtstq_s32(r.j, vdupq_n_s32(2));
    let poly = vbslq_f32(swap, r.sin_poly, r.cos_poly);
    let shifted = vsubq_s32(r.j, vdupq_n_s32(2));
    let sign = vshlq_n_s32::<{ SIGN_SHIFT as i32 }>(vbicq_s32(vdupq_n_s32(4), shifted));
    with_sign(poly, sign)
}

/// Computes the sine of four `f32` values.
///
/// # Safety
///
/// This function is safe to call only on AArch64 targets with NEON support.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn vsinq_f32(x: float32x4_t) -> float32x4_t {
    sin_of(&reduce(x))
}

/// Computes the cosine of four `f32` values.
///
/// # Safety
///
/// This function is safe to call only on AArch64 targets with NEON support.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn vcosq_f32(x: float32x4_t) -> float32x4_t {
    cos_of(&reduce(x))
}

/// Computes sine and cosine of four `f32` values from one reduction.
///
/// # Safety
///
/// This function is safe to call only on AArch64 targets with NEON support.
#[inline]
#[target_feature(enable = "neon")]
pub unsafe fn vsincosq_f32(x: float32x4_t) -> (float32x4_t, float32x4_t) {
    let r = reduce(x);
    (sin_of(&r), cos_of(&r))
}

#[inline(always)]
pub(crate) fn sin<const N: usize>(mut x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    if N % LANE_COUNT != 0 {
        return portable::sin(x);
    }
    for block in x.as_mut_array().chunks_exact_mut(LANE_COUNT) {
        // SAFETY: NEON is part of the AArch64 baseline and each block holds
        // exactly four lanes.
        unsafe { vst1q_f32(block.as_mut_ptr(), vsinq_f32(vld1q_f32(block.as_ptr()))) };
    }
    x
}

#[inline(always)]
pub(crate) fn cos<const N: usize>(mut x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    if N % LANE_COUNT != 0 {
        return portable::cos(x);
    }
    for block in x.as_mut_array().chunks_exact_mut(LANE_COUNT) {
        // SAFETY: see `sin`.
        unsafe { vst1q_f32(block.as_mut_ptr(), vcosq_f32(vld1q_f32(block.as_ptr()))) };
    }
    x
}

#[inline(always)]
pub(crate) fn sincos<const N: usize>(
    x: LaneVector<f32, N>,
) -> (LaneVector<f32, N>, LaneVector<f32, N>) {
    if N % LANE_COUNT != 0 {
        return portable::sincos(x);
    }

    let mut s = x;
    let mut c = x;
    for (s_block, c_block) in s
        .as_mut_array()
        .chunks_exact_mut(LANE_COUNT)
        .zip(c.as_mut_array().chunks_exact_mut(LANE_COUNT))
    {
        // SAFETY: see `sin`.
        unsafe {
            let (sin, cos) = vsincosq_f32(vld1q_f32(s_block.as_ptr()));
            vst1q_f32(s_block.as_mut_ptr(), sin);
            vst1q_f32(c_block.as_mut_ptr(), cos);
        }
    }

    (s, c)
}
