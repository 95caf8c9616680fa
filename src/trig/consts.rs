#![allow(clippy::excessive_precision)]

//! Constants shared by the portable and intrinsic sine/cosine kernels.

/// 4/π, maps `|x|` to its octant index.
pub(crate) const FOPI: f32 = 1.27323954473516;

// π/4 split into three parts so `j * π/4` can be subtracted without losing
// the low bits of the argument.
pub(crate) const DP1: f32 = 0.78515625;
pub(crate) const DP2: f32 = 2.4187564849853515625e-4;
pub(crate) const DP3: f32 = 3.77489497744594108e-8;

// cos(x) ≈ 1 - x²/2 + x⁴·P(x²) on [-π/4, π/4]
pub(crate) const COS_P0: f32 = 2.443315711809948e-5;
pub(crate) const COS_P1: f32 = -1.388731625493765e-3;
pub(crate) const COS_P2: f32 = 4.166664568298827e-2;

// sin(x) ≈ x + x³·S(x²) on [-π/4, π/4]
pub(crate) const SIN_P0: f32 = -1.9515295891e-4;
pub(crate) const SIN_P1: f32 = 8.3321608736e-3;
pub(crate) const SIN_P2: f32 = -1.6666654611e-1;

/// IEEE-754 sign bit of an `f32`, as `i32`.
pub(crate) const SIGN_MASK: i32 = i32::MIN;

/// Shift that moves octant bit 2 into the sign bit.
pub(crate) const SIGN_SHIFT: u32 = 29;
