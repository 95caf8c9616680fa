use std::fmt::Debug;

use num::traits::{Num, NumAssign};

/// Scalar type that can live in a lane of a [`LaneVector`](super::LaneVector).
///
/// Blanket-implemented for every primitive integer and float type.
pub trait Element: Copy + Debug + PartialOrd + Num + NumAssign + Send + Sync + 'static {}

impl<T> Element for T where T: Copy + Debug + PartialOrd + Num + NumAssign + Send + Sync + 'static {}

/// Floating-point element with a same-width signed integer twin.
///
/// The bit casts preserve the exact bit pattern, so sign and exponent
/// manipulation can be done with integer lane operations.
pub trait FloatBits: Element {
    /// Signed integer type with the same width as `Self`.
    type Bits: Element;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    /// Truncating conversion toward zero, same as an `as` cast.
    fn trunc_to_int(self) -> Self::Bits;

    fn from_int(value: Self::Bits) -> Self;
}

impl FloatBits for f32 {
    type Bits = i32;

    #[inline(always)]
    fn to_bits(self) -> i32 {
        f32::to_bits(self) as i32
    }

    #[inline(always)]
    fn from_bits(bits: i32) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline(always)]
    fn trunc_to_int(self) -> i32 {
        self as i32
    }

    #[inline(always)]
    fn from_int(value: i32) -> Self {
        value as f32
    }
}

impl FloatBits for f64 {
    type Bits = i64;

    #[inline(always)]
    fn to_bits(self) -> i64 {
        f64::to_bits(self) as i64
    }

    #[inline(always)]
    fn from_bits(bits: i64) -> Self {
        f64::from_bits(bits as u64)
    }

    #[inline(always)]
    fn trunc_to_int(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn from_int(value: i64) -> Self {
        value as f64
    }
}

/// Lane-wise sine and cosine.
///
/// Implemented for `LaneVector<f32, N>` of any width; see [`crate::trig`] for
/// the approximation and its accuracy bounds.
pub trait SimdTrig: Sized {
    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// Computes sine and cosine together, sharing the range reduction.
    fn sin_cos(self) -> (Self, Self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_bits_round_trip_sign() {
        assert_eq!(FloatBits::to_bits(-0.0f32), i32::MIN);
        assert_eq!(<f32 as FloatBits>::from_bits(i32::MIN), -0.0);
        assert!(<f32 as FloatBits>::from_bits(i32::MIN).is_sign_negative());
        assert_eq!(FloatBits::to_bits(1.0f32), 0x3f80_0000);
    }

    #[test]
    fn test_trunc_to_int_rounds_toward_zero() {
        assert_eq!(FloatBits::trunc_to_int(2.9f32), 2);
        assert_eq!(FloatBits::trunc_to_int(-2.9f32), -2);
        assert_eq!(FloatBits::trunc_to_int(7.99f64), 7);
        assert_eq!(<f64 as FloatBits>::from_int(-3), -3.0);
    }
}
