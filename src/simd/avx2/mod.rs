//! AVX2 kernels for 256-bit registers (8 × `f32`).
//!
//! Compiled only when `build.rs` detects AVX2 on the build host and emits
//! `cfg(avx2)`. The kernels are `#[target_feature(enable = "avx,avx2")]`
//! functions, so the rest of the crate does not need to be built with
//! `-C target-feature=+avx2`.

pub mod trig;
