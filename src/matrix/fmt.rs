use std::fmt;

use super::{Layout, Matrix};
use crate::simd::Element;

/// Renders rows on separate lines: `[1, 2\n 3, 4]`.
impl<T, const M: usize, const N: usize, L> fmt::Display for Matrix<T, M, N, L>
where
    T: Element + fmt::Display,
    L: Layout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n ")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(value, f)?;
            }
        }

        f.write_str("]")
    }
}

impl<T: Element, const M: usize, const N: usize, L: Layout> fmt::Debug for Matrix<T, M, N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("layout", &L::NAME)
            .field("rows", &self.to_rows())
            .finish()
    }
}
