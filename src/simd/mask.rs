use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use super::{Element, LaneVector};

/// Per-lane boolean produced by lane comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mask<const N: usize>([bool; N]);

impl<const N: usize> Mask<N> {
    /// Sets every lane to `value`.
    #[inline(always)]
    pub const fn splat(value: bool) -> Self {
        Self([value; N])
    }

    /// Wraps an array of lane flags.
    #[inline(always)]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    /// Copies the lane flags out.
    #[inline(always)]
    pub const fn to_array(self) -> [bool; N] {
        self.0
    }

    /// Reads lane `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn test(&self, lane: usize) -> bool {
        self.0[lane]
    }

    /// Writes lane `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn set(&mut self, lane: usize, value: bool) {
        self.0[lane] = value;
    }

    /// Horizontal OR across every lane.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.iter().fold(false, |acc, &lane| acc | lane)
    }

    /// Horizontal AND across every lane.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.iter().fold(true, |acc, &lane| acc & lane)
    }

    /// True when no lane is set.
    #[inline(always)]
    pub fn none(self) -> bool {
        !self.any()
    }

    /// Picks `if_true[i]` where lane `i` is set and `if_false[i]` elsewhere.
    #[inline(always)]
    pub fn select<T: Element>(
        self,
        if_true: LaneVector<T, N>,
        if_false: LaneVector<T, N>,
    ) -> LaneVector<T, N> {
        LaneVector::from_array(std::array::from_fn(|i| {
            if self.0[i] {
                if_true[i]
            } else {
                if_false[i]
            }
        }))
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N> {
    fn from(lanes: [bool; N]) -> Self {
        Self(lanes)
    }
}

impl<const N: usize> BitOr for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }
}

impl<const N: usize> BitOrAssign for Mask<N> {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<const N: usize> BitAnd for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }
}

impl<const N: usize> BitAndAssign for Mask<N> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<const N: usize> Not for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|lane| !lane))
    }
}
