//! ARM NEON kernels for 128-bit registers (4 × `f32`).
//!
//! Compiled only on AArch64 when `build.rs` emits `cfg(neon)`. NEON is part
//! of the AArch64 baseline, so the kernels need no runtime check.

pub mod trig;
