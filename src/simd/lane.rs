//! Fixed-width lane vector.
//!
//! `LaneVector<T, N>` is a `#[repr(transparent)]` wrapper around `[T; N]`.
//! Every operation is a fixed-length elementwise transform over `N`, written
//! with array combinators so LLVM fully unrolls and vectorizes it for the
//! widths used by the matrix and trig engines. No operation allocates.

use std::array;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Shl, Shr, Sub, SubAssign,
};

use super::{Element, FloatBits, Mask};

/// `N` lanes of `T` processed together.
///
/// # Examples
///
/// ```rust
/// use lanemat::LaneVector;
///
/// let a = LaneVector::from_array([1.0f32, 2.0, 3.0, 4.0]);
/// let b = LaneVector::splat(2.0f32);
///
/// assert_eq!((a * b).to_array(), [2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(a.dot(b), 20.0);
/// assert!(a.simd_lt(b).any());
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct LaneVector<T, const N: usize>(pub(crate) [T; N]);

impl<T: Element, const N: usize> LaneVector<T, N> {
    /// Number of lanes.
    pub const LANES: usize = N;

    /// Broadcasts `value` to every lane.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// All lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Wraps an array, lane `i` taking `lanes[i]`.
    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Copies the lanes out as an array.
    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the lanes as an array.
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the lanes as an array.
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map<U: Element>(self, f: impl FnMut(T) -> U) -> LaneVector<U, N> {
        LaneVector(self.0.map(f))
    }

    /// Combines lanes pairwise with `f`.
    #[inline(always)]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Computes `self * a + b` lane-wise, rounding after each step.
    #[inline(always)]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    /// Sums every lane, left to right.
    #[inline(always)]
    pub fn reduce_sum(self) -> T {
        self.0.iter().fold(T::zero(), |acc, &lane| acc + lane)
    }

    /// Dot product of two lane vectors.
    #[inline(always)]
    pub fn dot(self, other: Self) -> T {
        (self * other).reduce_sum()
    }

    /// Dot product broadcast back to every lane.
    #[inline(always)]
    pub fn cdot(self, other: Self) -> Self {
        Self::splat(self.dot(other))
    }

    /// Collects lane `lane` of each of the `N` vectors in `vectors`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= K`.
    #[inline(always)]
    pub fn gather<const K: usize>(vectors: &[LaneVector<T, K>; N], lane: usize) -> Self {
        Self(array::from_fn(|i| vectors[i].0[lane]))
    }

    /// Writes lane `i` of `self` into lane `lane` of `vectors[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= K`.
    #[inline(always)]
    pub fn scatter<const K: usize>(self, vectors: &mut [LaneVector<T, K>; N], lane: usize) {
        for (vector, value) in vectors.iter_mut().zip(self.0) {
            vector.0[lane] = value;
        }
    }

    #[inline(always)]
    fn compare(self, other: Self, mut f: impl FnMut(&T, &T) -> bool) -> Mask<N> {
        Mask::from_array(array::from_fn(|i| f(&self.0[i], &other.0[i])))
    }

    /// Lane-wise `==`.
    #[inline(always)]
    pub fn simd_eq(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a == b)
    }

    /// Lane-wise `!=`. NaN lanes are always set.
    #[inline(always)]
    pub fn simd_ne(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a != b)
    }

    /// Lane-wise `<`.
    #[inline(always)]
    pub fn simd_lt(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a < b)
    }

    /// Lane-wise `<=`.
    #[inline(always)]
    pub fn simd_le(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a <= b)
    }

    /// Lane-wise `>`.
    #[inline(always)]
    pub fn simd_gt(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a > b)
    }

    /// Lane-wise `>=`.
    #[inline(always)]
    pub fn simd_ge(self, other: Self) -> Mask<N> {
        self.compare(other, |a, b| a >= b)
    }

    /// Lane-wise blend: `if_true` where `mask` is set, `if_false` elsewhere.
    #[inline(always)]
    pub fn select(mask: Mask<N>, if_true: Self, if_false: Self) -> Self {
        mask.select(if_true, if_false)
    }
}

impl<T: FloatBits, const N: usize> LaneVector<T, N> {
    /// Reinterprets every lane as its same-width signed integer.
    #[inline(always)]
    pub fn to_bits(self) -> LaneVector<T::Bits, N> {
        LaneVector(self.0.map(<T as FloatBits>::to_bits))
    }

    /// Reinterprets integer lanes as floats of the same width.
    #[inline(always)]
    pub fn from_bits(bits: LaneVector<T::Bits, N>) -> Self {
        Self(bits.0.map(<T as FloatBits>::from_bits))
    }

    /// Truncating float to integer conversion.
    #[inline(always)]
    pub fn trunc_to_int(self) -> LaneVector<T::Bits, N> {
        LaneVector(self.0.map(<T as FloatBits>::trunc_to_int))
    }

    /// Converts integer lanes to floats, like `as`.
    #[inline(always)]
    pub fn from_int(values: LaneVector<T::Bits, N>) -> Self {
        Self(values.0.map(<T as FloatBits>::from_int))
    }
}

impl<T: Element, const N: usize> Default for LaneVector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for LaneVector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Element, const N: usize> From<LaneVector<T, N>> for [T; N] {
    fn from(vector: LaneVector<T, N>) -> Self {
        vector.0
    }
}

impl<T: Element, const N: usize> PartialEq for LaneVector<T, N> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.simd_ne(*other).none()
    }
}

impl<T: Element, const N: usize> fmt::Debug for LaneVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T, const N: usize> Index<usize> for LaneVector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T, const N: usize> IndexMut<usize> for LaneVector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.0[lane]
    }
}

// Arithmetic against another lane vector and against a scalar broadcast
// to every lane.
macro_rules! impl_lane_arith {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Element, const N: usize> $Op for LaneVector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| $Op::$op(self.0[i], rhs.0[i])))
            }
        }

        impl<T: Element, const N: usize> $Op<T> for LaneVector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: T) -> Self {
                Self(self.0.map(|lane| $Op::$op(lane, rhs)))
            }
        }

        impl<T: Element, const N: usize> $OpAssign for LaneVector<T, N> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                for (lane, value) in self.0.iter_mut().zip(rhs.0) {
                    $OpAssign::$op_assign(lane, value);
                }
            }
        }

        impl<T: Element, const N: usize> $OpAssign<T> for LaneVector<T, N> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: T) {
                for lane in self.0.iter_mut() {
                    $OpAssign::$op_assign(lane, rhs);
                }
            }
        }
    };
}

impl_lane_arith!(Add, add, AddAssign, add_assign);
impl_lane_arith!(Sub, sub, SubAssign, sub_assign);
impl_lane_arith!(Mul, mul, MulAssign, mul_assign);
impl_lane_arith!(Div, div, DivAssign, div_assign);

impl<T: Element + Neg<Output = T>, const N: usize> Neg for LaneVector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.map(|lane| -lane))
    }
}

// Bitwise operations, available for integer lanes.
macro_rules! impl_lane_bits {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Element + $Op<Output = T>, const N: usize> $Op for LaneVector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| $Op::$op(self.0[i], rhs.0[i])))
            }
        }

        impl<T: Element + $Op<Output = T>, const N: usize> $OpAssign for LaneVector<T, N> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_lane_bits!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_lane_bits!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_lane_bits!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T: Element + Not<Output = T>, const N: usize> Not for LaneVector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|lane| !lane))
    }
}

impl<T: Element + Shl<u32, Output = T>, const N: usize> Shl<u32> for LaneVector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        Self(self.0.map(|lane| lane << count))
    }
}

impl<T: Element + Shr<u32, Output = T>, const N: usize> Shr<u32> for LaneVector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        Self(self.0.map(|lane| lane >> count))
    }
}
