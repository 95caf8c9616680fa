//! Lane-vector sine and cosine for any width.
//!
//! Every lane goes through the same steps as the intrinsic kernels in
//! `simd::avx2::trig` and `simd::neon::trig`, in the same order and without
//! fused multiply-add, so all backends round identically.

use crate::simd::LaneVector;

use super::consts::{
    COS_P0, COS_P1, COS_P2, DP1, DP2, DP3, FOPI, SIGN_MASK, SIGN_SHIFT, SIN_P0, SIN_P1, SIN_P2,
};

/// Range-reduced argument with both polynomial branches evaluated.
pub(crate) struct Octant<const N: usize> {
    /// Sign bits of the input.
    sign: LaneVector<i32, N>,
    /// Even octant index `j` of `|x|`.
    j: LaneVector<i32, N>,
    /// Cosine polynomial of the reduced argument.
    cos_poly: LaneVector<f32, N>,
    /// Sine polynomial of the reduced argument.
    sin_poly: LaneVector<f32, N>,
}

impl<const N: usize> Octant<N> {
    #[inline(always)]
    pub(crate) fn reduce(x: LaneVector<f32, N>) -> Self {
        let bits = x.to_bits();
        let sign = bits & LaneVector::splat(SIGN_MASK);
        let x = LaneVector::<f32, N>::from_bits(bits & LaneVector::splat(!SIGN_MASK));

        // j = trunc(|x| * 4/π), rounded up to even. Huge inputs saturate, so
        // the integer steps wrap instead of overflowing.
        let j = (x * FOPI).trunc_to_int();
        let j = j.zip_map(j & LaneVector::splat(1), i32::wrapping_add);
        let y = LaneVector::<f32, N>::from_int(j);

        let x = ((x - y * DP1) - y * DP2) - y * DP3;
        let z = x * x;

        let mut cos_poly = LaneVector::<f32, N>::splat(COS_P0);
        cos_poly = cos_poly * z + COS_P1;
        cos_poly = cos_poly * z + COS_P2;
        cos_poly = cos_poly * z * z;
        cos_poly = cos_poly - z * 0.5;
        cos_poly = cos_poly + 1.0;

        let mut sin_poly = LaneVector::<f32, N>::splat(SIN_P0);
        sin_poly = sin_poly * z + SIN_P1;
        sin_poly = sin_poly * z + SIN_P2;
        sin_poly = sin_poly * z * x;
        sin_poly = sin_poly + x;

        Self {
            sign,
            j,
            cos_poly,
            sin_poly,
        }
    }

    /// Lanes whose octant calls for the cosine polynomial in `sin`.
    #[inline(always)]
    fn swap(&self) -> crate::simd::Mask<N> {
        (self.j & LaneVector::splat(2)).simd_ne(LaneVector::zero())
    }

    #[inline(always)]
    pub(crate) fn sin(&self) -> LaneVector<f32, N> {
        let poly = LaneVector::select(self.swap(), self.cos_poly, self.sin_poly);
        let sign = self.sign ^ ((self.j & LaneVector::splat(4)) << SIGN_SHIFT);
        apply_sign(poly, sign)
    }

    #[inline(always)]
    pub(crate) fn cos(&self) -> LaneVector<f32, N> {
        let poly = LaneVector::select(self.swap(), self.sin_poly, self.cos_poly);
        let shifted = self.j.zip_map(LaneVector::splat(2), i32::wrapping_sub);
        let sign = (!shifted & LaneVector::splat(4)) << SIGN_SHIFT;
        apply_sign(poly, sign)
    }
}

#[inline(always)]
fn apply_sign<const N: usize>(
    poly: LaneVector<f32, N>,
    sign: LaneVector<i32, N>,
) -> LaneVector<f32, N> {
    LaneVector::from_bits(poly.to_bits() ^ sign)
}

#[inline(always)]
pub(crate) fn sin<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    Octant::reduce(x).sin()
}

#[inline(always)]
pub(crate) fn cos<const N: usize>(x: LaneVector<f32, N>) -> LaneVector<f32, N> {
    Octant::reduce(x).cos()
}

#[inline(always)]
pub(crate) fn sincos<const N: usize>(
    x: LaneVector<f32, N>,
) -> (LaneVector<f32, N>, LaneVector<f32, N>) {
    let octant = Octant::reduce(x);
    (octant.sin(), octant.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octant_index_is_even() {
        let x = LaneVector::from_array([0.1f32, 0.9, 1.7, 2.5, -3.3, 5.0, 100.0, 0.0]);
        let octant = Octant::reduce(x);

        for (lane, j) in octant.j.to_array().into_iter().enumerate() {
            assert_eq!(j & 1, 0, "lane {lane} has odd octant {j}");
        }
        assert_eq!(octant.j[0], 0);
        assert_eq!(octant.j[1], 2);
        assert_eq!(octant.sign[4], SIGN_MASK);
    }

    #[test]
    fn test_matches_std_on_small_grid() {
        let values: [f32; 16] = std::array::from_fn(|i| (i as f32 - 7.5) * 0.83);
        let (s, c) = sincos(LaneVector::from_array(values));

        for (i, x) in values.iter().enumerate() {
            assert!((s[i] - x.sin()).abs() < 1e-6, "sin({x}) = {}", s[i]);
            assert!((c[i] - x.cos()).abs() < 1e-6, "cos({x}) = {}", c[i]);
        }
    }

    #[test]
    fn test_signed_zero() {
        let s = sin(LaneVector::from_array([0.0f32, -0.0]));
        assert!(s[0] == 0.0 && s[0].is_sign_positive());
        assert!(s[1] == 0.0 && s[1].is_sign_negative());
        assert_eq!(cos(LaneVector::from_array([-0.0f32])).to_array(), [1.0]);
    }

    #[test]
    fn test_huge_input_does_not_panic() {
        let x = LaneVector::from_array([f32::MAX, -f32::MAX, 3.0e9, f32::INFINITY]);
        let _ = sincos(x);
    }
}
