/// Builds a [`Matrix`](crate::Matrix) from values listed row by row.
///
/// The element type and shape come first, then the values. A fourth
/// argument before the `;` names the layout; without it the crate's
/// [`DefaultLayout`](crate::matrix::DefaultLayout) is used. Supplying the
/// wrong number of values is a compile error.
///
/// ```rust
/// use lanemat::make_matrix;
/// use lanemat::matrix::RowMajor;
///
/// let m = make_matrix!(f32, 2, 2; 1.0, 2.0, 3.0, 4.0);
/// assert_eq!(m.element(0, 1), 2.0);
/// assert_eq!(m.element(1, 0), 3.0);
///
/// let r = make_matrix!(i64, 1, 3, RowMajor; 1, 2, 3);
/// assert_eq!(r.row::<0>().to_array(), [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! make_matrix {
    ($t:ty, $m:expr, $n:expr; $($value:expr),+ $(,)?) => {
        $crate::matrix::Matrix::<$t, { $m }, { $n }>::from_flat([$($value),+])
    };
    ($t:ty, $m:expr, $n:expr, $layout:ty; $($value:expr),+ $(,)?) => {
        $crate::matrix::Matrix::<$t, { $m }, { $n }, $layout>::from_flat([$($value),+])
    };
}
