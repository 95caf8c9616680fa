use std::array;

use super::{all_lanes_equal, broadcast_accumulate, private, Layout};
use crate::simd::{Element, LaneVector};

/// Stores an `M × N` matrix as `N` column vectors of length `M`.
///
/// Columns are the cheap axis; a row is gathered from all `N` columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl private::Sealed for ColumnMajor {}

impl Layout for ColumnMajor {
    const NAME: &'static str = "column-major";

    type Storage<T: Element, const M: usize, const N: usize> = [LaneVector<T, M>; N];

    #[inline(always)]
    fn from_fn<T: Element, const M: usize, const N: usize>(
        mut f: impl FnMut(usize, usize) -> T,
    ) -> [LaneVector<T, M>; N] {
        array::from_fn(|j| LaneVector::from_array(array::from_fn(|i| f(i, j))))
    }

    #[inline(always)]
    fn zero<T: Element, const M: usize, const N: usize>() -> [LaneVector<T, M>; N] {
        [LaneVector::zero(); N]
    }

    #[inline(always)]
    fn element_ref<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, M>; N],
        i: usize,
        j: usize,
    ) -> &T {
        &storage[j][i]
    }

    #[inline(always)]
    fn element_mut<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, M>; N],
        i: usize,
        j: usize,
    ) -> &mut T {
        &mut storage[j][i]
    }

    #[inline(always)]
    fn row<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, M>; N],
        i: usize,
    ) -> LaneVector<T, N> {
        LaneVector::gather(storage, i)
    }

    #[inline(always)]
    fn set_row<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, M>; N],
        i: usize,
        row: LaneVector<T, N>,
    ) {
        row.scatter(storage, i);
    }

    #[inline(always)]
    fn col<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, M>; N],
        j: usize,
    ) -> LaneVector<T, M> {
        storage[j]
    }

    #[inline(always)]
    fn set_col<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, M>; N],
        j: usize,
        col: LaneVector<T, M>,
    ) {
        storage[j] = col;
    }

    #[inline(always)]
    fn add<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, M>; N],
        r: &[LaneVector<T, M>; N],
    ) -> [LaneVector<T, M>; N] {
        array::from_fn(|j| l[j] + r[j])
    }

    #[inline(always)]
    fn sub<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, M>; N],
        r: &[LaneVector<T, M>; N],
    ) -> [LaneVector<T, M>; N] {
        array::from_fn(|j| l[j] - r[j])
    }

    #[inline(always)]
    fn scale<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, M>; N],
        k: T,
    ) -> [LaneVector<T, M>; N] {
        let k = LaneVector::splat(k);
        array::from_fn(|j| k * storage[j])
    }

    #[inline(always)]
    fn add_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, M>; N],
        r: &[LaneVector<T, M>; N],
    ) {
        for (col, other) in l.iter_mut().zip(r) {
            *col += *other;
        }
    }

    #[inline(always)]
    fn sub_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, M>; N],
        r: &[LaneVector<T, M>; N],
    ) {
        for (col, other) in l.iter_mut().zip(r) {
            *col -= *other;
        }
    }

    #[inline(always)]
    fn scale_assign<T: Element, const M: usize, const N: usize>(
        storage: &mut [LaneVector<T, M>; N],
        k: T,
    ) {
        let k = LaneVector::splat(k);
        for col in storage.iter_mut() {
            *col *= k;
        }
    }

    // result_col[i] = Σ_j broadcast(r(j, i)) * l_col[j]
    #[inline(always)]
    fn mul<T: Element, const M: usize, const K: usize, const N: usize>(
        l: &[LaneVector<T, M>; K],
        r: &[LaneVector<T, K>; N],
    ) -> [LaneVector<T, M>; N] {
        array::from_fn(|i| broadcast_accumulate(r[i], l))
    }

    // Every output column reads every column of `l`, so `l` is captured
    // whole before the first column is overwritten.
    #[inline(always)]
    fn mul_assign<T: Element, const M: usize, const N: usize>(
        l: &mut [LaneVector<T, M>; N],
        r: &[LaneVector<T, N>; N],
    ) {
        let lhs = *l;

        for (col, weights) in l.iter_mut().zip(r) {
            *col = broadcast_accumulate(*weights, &lhs);
        }
    }

    #[inline(always)]
    fn mul_vec<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, M>; N],
        v: LaneVector<T, N>,
    ) -> LaneVector<T, M> {
        broadcast_accumulate(v, l)
    }

    // Rows of `r` are the foreign axis: one dot product per stored column.
    #[inline(always)]
    fn vec_mul<T: Element, const M: usize, const N: usize>(
        v: LaneVector<T, M>,
        r: &[LaneVector<T, M>; N],
    ) -> LaneVector<T, N> {
        LaneVector::from_array(array::from_fn(|j| v.dot(r[j])))
    }

    #[inline(always)]
    fn equals<T: Element, const M: usize, const N: usize>(
        l: &[LaneVector<T, M>; N],
        r: &[LaneVector<T, M>; N],
    ) -> bool {
        all_lanes_equal(l, r)
    }

    // Column i of the result is row i of the source.
    #[inline(always)]
    fn transpose<T: Element, const M: usize, const N: usize>(
        storage: &[LaneVector<T, M>; N],
    ) -> [LaneVector<T, N>; M] {
        array::from_fn(|i| LaneVector::gather(storage, i))
    }
}
