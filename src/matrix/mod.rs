//! Fixed-size matrices over lane vectors.
//!
//! [`Matrix<T, M, N, L>`] has `M` rows and `N` columns, all known at compile
//! time, and lives entirely on the stack. Shapes are part of the type: adding
//! a 2×3 matrix to a 3×2 matrix, or multiplying operands whose inner
//! dimensions disagree, does not compile.
//!
//! Elements are always addressed logically as `(row, col)`. How they are
//! stored is decided by the layout parameter `L` (see [`layout`]); every
//! operation gives the same result under either layout.
//!
//! # Examples
//!
//! ```rust
//! use lanemat::{make_matrix, Matrix};
//!
//! let a = make_matrix!(i32, 2, 3; 1, 2, 3, 4, 5, 6);
//! let b = make_matrix!(i32, 3, 2; 7, 8, 9, 10, 11, 12);
//!
//! let c: Matrix<i32, 2, 2> = a * b;
//! assert_eq!(c.to_rows(), [[58, 64], [139, 154]]);
//! assert_eq!(a.transpose().transpose(), a);
//! ```

mod fmt;
pub mod layout;
mod macros;

use std::array;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{element_count_error, LaneMatError};
use crate::simd::{Element, LaneVector};

pub use layout::{ColumnMajor, DefaultLayout, Layout, RowMajor};

/// An `M × N` matrix of `T` stored with layout `L`.
pub struct Matrix<T, const M: usize, const N: usize, L = DefaultLayout>
where
    T: Element,
    L: Layout,
{
    storage: L::Storage<T, M, N>,
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Clone for Matrix<T, M, N, L> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Copy for Matrix<T, M, N, L> {}

impl<T: Element, const M: usize, const N: usize, L: Layout> Matrix<T, M, N, L> {
    /// Number of rows.
    pub const ROWS: usize = M;

    /// Number of columns.
    pub const COLS: usize = N;

    /// Builds a matrix whose element `(i, j)` is `f(i, j)`.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            storage: L::from_fn::<T, M, N>(f),
        }
    }

    /// Builds a matrix from its rows.
    #[inline(always)]
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self::from_fn(|i, j| rows[i][j])
    }

    /// Builds a matrix from `M * N` values listed row by row.
    ///
    /// The count is a precondition, checked with `debug_assert!`. Use
    /// `Matrix::try_from(values)` for a checked conversion.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `values.len() != M * N`. In release builds
    /// a short slice panics on the first missing index.
    #[inline(always)]
    pub fn from_slice(values: &[T]) -> Self {
        debug_assert_eq!(
            values.len(),
            M * N,
            "a {}x{} matrix needs {} elements",
            M,
            N,
            M * N
        );
        Self::from_fn(|i, j| values[i * N + j])
    }

    /// Builds a matrix from an array of `M * N` values listed row by row.
    ///
    /// A wrong element count is rejected at compile time. This is the
    /// constructor behind [`make_matrix!`](crate::make_matrix).
    ///
    /// ```rust
    /// use lanemat::Matrix;
    ///
    /// let m = Matrix::<f32, 2, 2>::from_flat([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.element(0, 1), 2.0);
    /// assert_eq!(m.element(1, 0), 3.0);
    /// ```
    ///
    /// ```compile_fail
    /// use lanemat::Matrix;
    ///
    /// let m = Matrix::<f32, 2, 2>::from_flat([1.0, 2.0, 3.0]);
    /// ```
    #[inline(always)]
    pub fn from_flat<const K: usize>(values: [T; K]) -> Self {
        const {
            assert!(K == M * N, "element count does not match the matrix shape");
        }
        Self::from_fn(|i, j| values[i * N + j])
    }

    /// Overwrites every element from `M * N` values listed row by row.
    ///
    /// Same precondition as [`Matrix::from_slice`].
    #[inline(always)]
    pub fn copy_from_slice(&mut self, values: &[T]) {
        *self = Self::from_slice(values);
    }

    /// Matrix with every element zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            storage: L::zero::<T, M, N>(),
        }
    }

    /// Sets every element to zero.
    #[inline(always)]
    pub fn set_zero(&mut self) {
        self.storage = L::zero::<T, M, N>();
    }

    /// Reads element `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= M` or `j >= N`.
    #[inline(always)]
    pub fn element(&self, i: usize, j: usize) -> T {
        *L::element_ref::<T, M, N>(&self.storage, i, j)
    }

    /// Writes element `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= M` or `j >= N`.
    #[inline(always)]
    pub fn set_element(&mut self, i: usize, j: usize, value: T) {
        *L::element_mut::<T, M, N>(&mut self.storage, i, j) = value;
    }

    /// Row `I`, with the bound checked at compile time.
    #[inline(always)]
    pub fn row<const I: usize>(&self) -> LaneVector<T, N> {
        const {
            assert!(I < M, "row index out of range");
        }
        L::row::<T, M, N>(&self.storage, I)
    }

    /// Replaces row `I`, with the bound checked at compile time.
    #[inline(always)]
    pub fn set_row<const I: usize>(&mut self, row: LaneVector<T, N>) {
        const {
            assert!(I < M, "row index out of range");
        }
        L::set_row::<T, M, N>(&mut self.storage, I, row);
    }

    /// Column `J`, with the bound checked at compile time.
    #[inline(always)]
    pub fn col<const J: usize>(&self) -> LaneVector<T, M> {
        const {
            assert!(J < N, "column index out of range");
        }
        L::col::<T, M, N>(&self.storage, J)
    }

    /// Replaces column `J`, with the bound checked at compile time.
    #[inline(always)]
    pub fn set_col<const J: usize>(&mut self, col: LaneVector<T, M>) {
        const {
            assert!(J < N, "column index out of range");
        }
        L::set_col::<T, M, N>(&mut self.storage, J, col);
    }

    /// Row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= M`.
    #[inline(always)]
    pub fn row_at(&self, i: usize) -> LaneVector<T, N> {
        L::row::<T, M, N>(&self.storage, i)
    }

    /// Replaces row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= M`.
    #[inline(always)]
    pub fn set_row_at(&mut self, i: usize, row: LaneVector<T, N>) {
        L::set_row::<T, M, N>(&mut self.storage, i, row);
    }

    /// Column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= N`.
    #[inline(always)]
    pub fn col_at(&self, j: usize) -> LaneVector<T, M> {
        L::col::<T, M, N>(&self.storage, j)
    }

    /// Replaces column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= N`.
    #[inline(always)]
    pub fn set_col_at(&mut self, j: usize, col: LaneVector<T, M>) {
        L::set_col::<T, M, N>(&mut self.storage, j, col);
    }

    /// Copies the matrix out as an array of rows.
    #[inline(always)]
    pub fn to_rows(&self) -> [[T; N]; M] {
        array::from_fn(|i| L::row::<T, M, N>(&self.storage, i).to_array())
    }

    /// Stored lane vectors, in layout order.
    #[inline(always)]
    pub fn storage(&self) -> &L::Storage<T, M, N> {
        &self.storage
    }

    /// Returns the `N × M` transpose, stored with the same layout.
    #[inline(always)]
    pub fn transpose(&self) -> Matrix<T, N, M, L> {
        Matrix {
            storage: L::transpose::<T, M, N>(&self.storage),
        }
    }
}

impl<T: Element, const N: usize, L: Layout> Matrix<T, N, N, L> {
    /// Square identity matrix.
    #[inline(always)]
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Overwrites `self` with the identity matrix.
    #[inline(always)]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Default for Matrix<T, M, N, L> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> TryFrom<&[T]> for Matrix<T, M, N, L> {
    type Error = LaneMatError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        if values.len() != M * N {
            return Err(element_count_error(M * N, values.len()));
        }
        Ok(Self::from_fn(|i, j| values[i * N + j]))
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> From<[[T; N]; M]>
    for Matrix<T, M, N, L>
{
    fn from(rows: [[T; N]; M]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> PartialEq for Matrix<T, M, N, L> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        L::equals::<T, M, N>(&self.storage, &other.storage)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Index<(usize, usize)>
    for Matrix<T, M, N, L>
{
    type Output = T;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        L::element_ref::<T, M, N>(&self.storage, i, j)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> IndexMut<(usize, usize)>
    for Matrix<T, M, N, L>
{
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        L::element_mut::<T, M, N>(&mut self.storage, i, j)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Add for Matrix<T, M, N, L> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            storage: L::add::<T, M, N>(&self.storage, &rhs.storage),
        }
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Sub for Matrix<T, M, N, L> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            storage: L::sub::<T, M, N>(&self.storage, &rhs.storage),
        }
    }
}

impl<T, const M: usize, const N: usize, L> Neg for Matrix<T, M, N, L>
where
    T: Element + Neg<Output = T>,
    L: Layout,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self * -T::one()
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> AddAssign for Matrix<T, M, N, L> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        L::add_assign::<T, M, N>(&mut self.storage, &rhs.storage);
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> SubAssign for Matrix<T, M, N, L> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        L::sub_assign::<T, M, N>(&mut self.storage, &rhs.storage);
    }
}

impl<T, const M: usize, const K: usize, const N: usize, L> Mul<Matrix<T, K, N, L>>
    for Matrix<T, M, K, L>
where
    T: Element,
    L: Layout,
{
    type Output = Matrix<T, M, N, L>;

    #[inline(always)]
    fn mul(self, rhs: Matrix<T, K, N, L>) -> Matrix<T, M, N, L> {
        Matrix {
            storage: L::mul::<T, M, K, N>(&self.storage, &rhs.storage),
        }
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Mul<LaneVector<T, N>>
    for Matrix<T, M, N, L>
{
    type Output = LaneVector<T, M>;

    #[inline(always)]
    fn mul(self, rhs: LaneVector<T, N>) -> LaneVector<T, M> {
        L::mul_vec::<T, M, N>(&self.storage, rhs)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Mul<Matrix<T, M, N, L>>
    for LaneVector<T, M>
{
    type Output = LaneVector<T, N>;

    #[inline(always)]
    fn mul(self, rhs: Matrix<T, M, N, L>) -> LaneVector<T, N> {
        L::vec_mul::<T, M, N>(self, &rhs.storage)
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> Mul<T> for Matrix<T, M, N, L> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        Self {
            storage: L::scale::<T, M, N>(&self.storage, rhs),
        }
    }
}

// The right operand must be square so the shape of `self` is unchanged.
impl<T: Element, const M: usize, const N: usize, L: Layout> MulAssign<Matrix<T, N, N, L>>
    for Matrix<T, M, N, L>
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N, L>) {
        L::mul_assign::<T, M, N>(&mut self.storage, &rhs.storage);
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> MulAssign<T> for Matrix<T, M, N, L> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: T) {
        L::scale_assign::<T, M, N>(&mut self.storage, rhs);
    }
}

// Division multiplies by one reciprocal, so it is only offered for floats.
impl<T, const M: usize, const N: usize, L> Div<T> for Matrix<T, M, N, L>
where
    T: Element + num::Float,
    L: Layout,
{
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        self * (T::one() / rhs)
    }
}

impl<T, const M: usize, const N: usize, L> DivAssign<T> for Matrix<T, M, N, L>
where
    T: Element + num::Float,
    L: Layout,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        *self *= T::one() / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const M: usize, const N: usize, L: Layout> Mul<Matrix<$t, M, N, L>> for $t {
                type Output = Matrix<$t, M, N, L>;

                #[inline(always)]
                fn mul(self, rhs: Matrix<$t, M, N, L>) -> Matrix<$t, M, N, L> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
