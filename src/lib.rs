//! # lanemat
//!
//! Fixed-size, stack-resident linear algebra over lane vectors, plus
//! vectorized single-precision sine and cosine.
//!
//! - [`LaneVector<T, N>`] is the lane primitive: `N` values of `T` with
//!   elementwise arithmetic, comparisons producing a [`Mask<N>`], select,
//!   and bit reinterpretation.
//! - [`Matrix<T, M, N, L>`] stores an `M × N` matrix as lane vectors in
//!   either [`ColumnMajor`] or [`RowMajor`] layout. Shapes are checked by the
//!   type system; nothing allocates.
//! - [`trig`] evaluates `sin`, `cos` and `sincos` over `f32` lane vectors and
//!   slices, using AVX2 or NEON kernels when `build.rs` detects them.
//!
//! # Configuration
//!
//! - Cargo feature `row-major` makes [`RowMajor`] the [`DefaultLayout`].
//!   Both layouts remain available by name either way.
//! - `build.rs` inspects the build host and sets one of `cfg(avx2)`,
//!   `cfg(neon)` or `cfg(fallback)`. Cross builds always use `fallback`.
//!
//! # Example
//!
//! ```rust
//! use lanemat::{make_matrix, LaneVector, Matrix, SimdTrig};
//!
//! let theta = std::f32::consts::FRAC_PI_2;
//! let (s, c) = LaneVector::<f32, 1>::splat(theta).sin_cos();
//!
//! let rotation: Matrix<f32, 2, 2> = make_matrix!(f32, 2, 2; c[0], -s[0], s[0], c[0]);
//! let p = rotation * LaneVector::from_array([1.0, 0.0]);
//!
//! assert!(p[0].abs() < 1e-6);
//! assert!((p[1] - 1.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod matrix;
pub mod simd;
pub mod trig;

pub use error::{LaneMatError, Result};
pub use matrix::{ColumnMajor, DefaultLayout, Layout, Matrix, RowMajor};
pub use simd::{Element, FloatBits, LaneVector, Mask, SimdTrig};
