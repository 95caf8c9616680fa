use std::array;

use super::{all_lanes_equal, broadcast_accumulate, private, Layout};
use crate::simd::{Element, LaneVector};

/// Stores an `M × N` matrix as `M` row vectors of length `N`.
///
/// Rows are the cheap axis; a column is gathered from all `M` rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl private::Sealed for RowMajor {}

impl Layout for RowMajor {
    const NAME: &'static str = "row-major";

    type Storage<T: Element, const M: usize, const N: usize> = [LaneVector<T, N>; M];

    #[inline(always)]
    fn from_fn<T: Element, const M: usize, const N: usize>(
        mut f: impl FnMut(usize, usize) -> T,
    ) -> [LaneVector<T, N>; M] {
        array::from_fn(|i| LaneVector::from_array(array::from_fn(|j| f(i, j))))
    }

    #[inline(always)]
    fn zero<T: Element, const M: usize, const N: usize>() -> [LaneVector<T, N>; M] {
        [LaneVector::zero(); M]
    }

    #[inline(always)]
    fn element_ref<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, N>; M],
        i: usize,
        j: usize,
    ) -> &T {
        &storage[i][j]
    }

    #[inline(always)]
    fn element_mut<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, N>; M],
        i: usize,
        j: usize,
    ) -> &mut T {
        &mut storage[i][j]
    }

    #[inline(always)]
    fn row<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, N>; M],
        i: usize,
    ) -> LaneVector<T, N> {
        storage[i]
    }

    #[inline(always)]
    fn set_row<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, N>; M],
        i: usize,
        row: LaneVector<T, N>,
    ) {
        storage[i] = row;
    }

    #[inline(always)]
    fn col<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, N>; M],
        j: usize,
    ) -> LaneVector<T, M> {
        LaneVector::gather(storage, j)
    }

    #[inline(always)]
    fn set_col<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, N>; M],
        j: usize,
        col: LaneVector<T, M>,
    ) {
        col.scatter(storage, j);
    }

    #[inline(always)]
    fn add<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; M],
    ) -> [LaneVector<T, N>; M] {
        array::from_fn(|i| l[i] + r[i])
    }

    #[inline(always)]
    fn sub<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; M],
    ) -> [LaneVector<T, N>; M] {
        array::from_fn(|i| l[i] - r[i])
    }

    #[inline(always)]
    fn scale<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, N>; M],
        k: T,
    ) -> [LaneVector<T, N>; M] {
        let k = LaneVector::splat(k);
        array::from_fn(|i| k * storage[i])
    }

    #[inline(always)]
    fn add_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; M],
    ) {
        for (row, other) in l.iter_mut().zip(r) {
            *row += *other;
        }
    }

    #[inline(always)]
    fn sub_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; M],
    ) {
        for (row, other) in l.iter_mut().zip(r) {
            *row -= *other;
        }
    }

    #[inline(always)]
    fn scale_assign<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, N>; M],
        k: T,
    ) {
        let k = LaneVector::splat(k);
        for row in storage.iter_mut() {
            *row *= k;
        }
    }

    // result_row[i] = Σ_j broadcast(l(i, j)) * r_row[j]
    #[inline(always)]
    fn mul<T: Element, const M: usize, const K: usize, const N: usize>(
        l: &[LaneVector<T, K>; M],
        r: &[LaneVector<T, N>; K],
    ) -> [LaneVector<T, N>; M] {
        array::from_fn(|i| broadcast_accumulate(l[i], r))
    }

    // Output row i only reads row i of `l`, so each row is captured just
    // before it is replaced.
    #[inline(always)]
    fn mul_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; N],
    ) {
        for row in l.iter_mut() {
            let weights = *row;
            *row = broadcast_accumulate(weights, r);
        }
    }

    // Rows of `l` are stored: one dot product per row.
    #[inline(always)]
    fn mul_vec<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, N>; M],
        v: LaneVector<T, N>,
    ) -> LaneVector<T, M> {
        LaneVector::from_array(array::from_fn(|i| l[i].dot(v)))
    }

    #[inline(always)]
    fn vec_mul<T: Element, const M: usize, const N: usize>(
        v: LaneVector<T, M>,
        r: &[LaneVector<T, N>; M],
    ) -> LaneVector<T, N> {
        broadcast_accumulate(v, r)
    }

    #[inline(always)]
    fn equals<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, N>; M],
        r: &[LaneVector<T, N>; M],
    ) -> bool {
        all_lanes_equal(l, r)
    }

    // Row j of the result is column j of the source.
    #[inline(always)]
    fn transpose<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, N>; M],
    ) -> [LaneVector<T, M>; N] {
        array::from_fn(|j| LaneVector::gather(storage, j))
    }
}
