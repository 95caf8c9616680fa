//! Storage layout policy.
//!
//! A matrix is stored either as `N` column vectors of length `M`
//! ([`ColumnMajor`]) or as `M` row vectors of length `N` ([`RowMajor`]). Each
//! layout implements every storage-dependent algorithm itself; the public
//! [`Matrix`](super::Matrix) API is the same for both and the results are
//! identical.
//!
//! Accessing the stored axis (columns for `ColumnMajor`, rows for
//! `RowMajor`) copies one lane vector. The other axis is a gather or scatter
//! across every stored vector.
//!
//! [`DefaultLayout`] is picked once per build with the `row-major` cargo
//! feature.

mod column;
mod row;

use std::fmt::Debug;

use crate::simd::{Element, LaneVector};

pub use column::ColumnMajor;
pub use row::RowMajor;

/// Layout used by `Matrix<T, M, N>` when no layout is named.
#[cfg(not(feature = "row-major"))]
pub type DefaultLayout = ColumnMajor;

/// Layout used by `Matrix<T, M, N>` when no layout is named.
#[cfg(feature = "row-major")]
pub type DefaultLayout = RowMajor;

mod private {
    pub trait Sealed {}
}

/// Physical arrangement of a matrix's lane vectors.
///
/// Sealed: only [`ColumnMajor`] and [`RowMajor`] implement it.
pub trait Layout:
    private::Sealed + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Human-readable layout name.
    const NAME: &'static str;

    /// Storage of an `M × N` matrix.
    type Storage<T: Element, const M: usize, const N: usize>: Copy + Send + Sync;

    fn from_fn<T: Element, const M: usize, const N: usize>(
        f: impl FnMut(usize, usize) -> T,
    ) -> Self::Storage<T, M, N>;

    fn zero<T: Element, const M: usize, const N: usize>() -> Self::Storage<T, M, N>;

    fn element_ref<T: Element, const M: usize, const N: usize>(
        storage: &Self::Storage<T, M, N>,
        i: usize,
        j: usize,
    ) -> &T;

    fn element_mut<T: Element, const M: usize, const N: usize>(
        storage: &mut Self::Storage<T, M, N>,
        i: usize,
        j: usize,
    ) -> &mut T;

    fn row<T: Element, const M: usize, const N: usize>(
        storage: &Self::Storage<T, M, N>,
        i: usize,
    ) -> LaneVector<T, N>;

    fn set_row<T: Element, const M: usize, const N: usize>(
        storage: &mut Self::Storage<T, M, N>,
        i: usize,
        row: LaneVector<T, N>,
    );

    fn col<T: Element, const M: usize, const N: usize>(
        storage: &Self::Storage<T, M, N>,
        j: usize,
    ) -> LaneVector<T, M>;

    fn set_col<T: Element, const M: usize, const N: usize>(
        storage: &mut Self::Storage<T, M, N>,
        j: usize,
        col: LaneVector<T, M>,
    );

    fn add<T: Element, const M: usize, const N: usize>(
        l: &Self::Storage<T, M, N>,
        r: &Self::Storage<T, M, N>,
    ) -> Self::Storage<T, M, N>;

    fn sub<T: Element, const M: usize, const N: usize>(
        l: &Self::Storage<T, M, N>,
        r: &Self::Storage<T, M, N>,
    ) -> Self::Storage<T, M, N>;

    /// Multiplies every element by `k`.
    fn scale<T: Element, const M: usize, const N: usize>(
        storage: &Self::Storage<T, M, N>,
        k: T,
    ) -> Self::Storage<T, M, N>;

    fn add_assign<T: Element, const M: usize, const N: usize>(
        l: &mut Self::Storage<T, M, N>,
        r: &Self::Storage<T, M, N>,
    );

    fn sub_assign<T: Element, const M: usize, const N: usize>(
        l: &mut Self::Storage<T, M, N>,
        r: &Self::Storage<T, M, N>,
    );

    fn scale_assign<T: Element, const M: usize, const N: usize>(
        storage: &mut Self::Storage<T, M, N>,
        k: T,
    );

    /// `(M × K) · (K × N)`.
    fn mul<T: Element, const M: usize, const K: usize, const N: usize>(
        l: &Self::Storage<T, M, K>,
        r: &Self::Storage<T, K, N>,
    ) -> Self::Storage<T, M, N>;

    /// In-place `l = l · r` for a square right operand.
    fn mul_assign<T: Element, const M: usize, const N: usize>(
        l: &mut Self::Storage<T, M, N>,
        r: &Self::Storage<T, N, N>,
    );

    /// Matrix times column vector.
    fn mul_vec<T: Element, const M: usize, const N: usize>(
        l: &Self::Storage<T, M, N>,
        v: LaneVector<T, N>,
    ) -> LaneVector<T, M>;

    /// Row vector times matrix.
    fn vec_mul<T: Element, const M: usize, const N: usize>(
        v: LaneVector<T, M>,
        r: &Self::Storage<T, M, N>,
    ) -> LaneVector<T, N>;

    /// True when every element compares equal.
    fn equals<T: Element, const M: usize, const N: usize>(
        l: &Self::Storage<T, M, N>,
        r: &Self::Storage<T, M, N>,
    ) -> bool;

    fn transpose<T: Element, const M: usize, const N: usize>(
        storage: &Self::Storage<T, M, N>,
    ) -> Self::Storage<T, N, M>;
}

/// Sums `vectors[j]` weighted by `weights[j]` broadcast across the lanes.
///
/// Shared core of every matrix product: the result is built from whole
/// stored vectors, never from a transposed operand.
#[inline(always)]
pub(crate) fn broadcast_accumulate<T: Element, const K: usize, const W: usize>(
    weights: LaneVector<T, K>,
    vectors: &[LaneVector<T, W>; K],
) -> LaneVector<T, W> {
    let mut terms = vectors.iter().zip(weights.to_array());

    let mut acc = match terms.next() {
        Some((vector, weight)) => LaneVector::splat(weight) * *vector,
        None => return LaneVector::zero(),
    };

    for (vector, weight) in terms {
        acc = LaneVector::splat(weight).mul_add(*vector, acc);
    }

    acc
}

/// Lane-wise inequality of two vector arrays, OR-reduced and then reduced
/// horizontally. True when no lane differs.
#[inline(always)]
pub(crate) fn all_lanes_equal<T: Element, const W: usize, const K: usize>(
    l: &[LaneVector<T, W>; K],
    r: &[LaneVector<T, W>; K],
) -> bool {
    l.iter()
        .zip(r.iter())
        .fold(crate::simd::Mask::splat(false), |diff, (a, b)| {
            diff | a.simd_ne(*b)
        })
        .none()
}
