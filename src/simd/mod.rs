//! Lane vector primitive and platform kernels.
//!
//! [`LaneVector`] and [`Mask`] are portable and always available. The `avx2`
//! and `neon` modules hold hand-written intrinsic kernels; `build.rs` enables
//! at most one of them after detecting the host CPU, and the trig engine
//! routes lane vectors of a compatible width through it.

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

mod lane;
mod mask;
pub mod traits;

pub use lane::LaneVector;
pub use mask::Mask;
pub use traits::{Element, FloatBits, SimdTrig};
