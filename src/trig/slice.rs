//! Sine and cosine over whole `f32` slices.
//!
//! Inputs are processed in [`BLOCK`]-lane lane vectors, so each block goes
//! through the same kernel as [`crate::trig::sin`]; a short tail is padded
//! with zeros and only its live lanes are written back. Results are
//! bit-identical to evaluating the lane entry points element by element.
//!
//! The `par_*` variants split the output into [`PARALLEL_CHUNK_SIZE`]-element
//! chunks and hand them to the rayon pool. Inputs of at most
//! [`PARALLEL_THRESHOLD`] elements are not worth the scheduling overhead and
//! run sequentially.
//!
//! Nothing here allocates. Output buffers are supplied by the caller and must
//! have the same length as the input.
//!
//! ```rust
//! use lanemat::trig::slice::sin_into;
//!
//! let input = [0.0f32, 0.5, 1.0];
//! let mut output = [0.0f32; 3];
//! sin_into(&input, &mut output).unwrap();
//! assert!((output[2] - 1.0f32.sin()).abs() < 1e-6);
//!
//! let mut short = [0.0f32; 2];
//! assert!(sin_into(&input, &mut short).is_err());
//! ```

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use crate::error::{length_mismatch_error, Result};
use crate::simd::LaneVector;

/// Lanes per block; one AVX2 register or two NEON registers.
pub const BLOCK: usize = 8;

/// Inputs at or below this length are never split across threads.
pub const PARALLEL_THRESHOLD: usize = 262_144;

/// Elements handed to one rayon task. A multiple of [`BLOCK`].
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

#[inline(always)]
fn check_len(input: usize, output: usize) -> Result<()> {
    if input != output {
        return Err(length_mismatch_error(input, output));
    }
    Ok(())
}

// Zero-pads a tail shorter than BLOCK.
#[inline(always)]
fn load(src: &[f32]) -> LaneVector<f32, BLOCK> {
    let mut lanes = [0.0f32; BLOCK];
    lanes[..src.len()].copy_from_slice(src);
    LaneVector::from_array(lanes)
}

#[inline(always)]
fn store(dst: &mut [f32], lanes: LaneVector<f32, BLOCK>) {
    let len = dst.len();
    dst.copy_from_slice(&lanes.as_array()[..len]);
}

#[inline(always)]
fn map_blocks(
    input: &[f32],
    output: &mut [f32],
    f: impl Fn(LaneVector<f32, BLOCK>) -> LaneVector<f32, BLOCK>,
) {
    for (src, dst) in input.chunks(BLOCK).zip(output.chunks_mut(BLOCK)) {
        store(dst, f(load(src)));
    }
}

#[inline(always)]
fn sincos_blocks(input: &[f32], sin_out: &mut [f32], cos_out: &mut [f32]) {
    for ((src, s), c) in input
        .chunks(BLOCK)
        .zip(sin_out.chunks_mut(BLOCK))
        .zip(cos_out.chunks_mut(BLOCK))
    {
        let (sin, cos) = super::sincos(load(src));
        store(s, sin);
        store(c, cos);
    }
}

fn par_map_blocks(
    input: &[f32],
    output: &mut [f32],
    f: impl Fn(LaneVector<f32, BLOCK>) -> LaneVector<f32, BLOCK> + Sync,
) {
    if input.len() <= PARALLEL_THRESHOLD {
        return map_blocks(input, output, f);
    }

    output
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(input.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(dst, src)| map_blocks(src, dst, &f));
}

/// Writes `sin(input[i])` to `output[i]`.
///
/// # Errors
///
/// Returns [`LaneMatError::LengthMismatch`](crate::error::LaneMatError::LengthMismatch)
/// if `output.len() != input.len()`; nothing is written in that case.
pub fn sin_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len(input.len(), output.len())?;
    map_blocks(input, output, super::sin::<BLOCK>);
    Ok(())
}

/// Writes `cos(input[i])` to `output[i]`.
///
/// # Errors
///
/// Same as [`sin_into`].
pub fn cos_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len(input.len(), output.len())?;
    map_blocks(input, output, super::cos::<BLOCK>);
    Ok(())
}

/// Writes sine and cosine of every input element, sharing one range
/// reduction per block.
///
/// # Errors
///
/// Returns `LengthMismatch` for the first output whose length differs from
/// the input.
pub fn sincos_into(input: &[f32], sin_out: &mut [f32], cos_out: &mut [f32]) -> Result<()> {
    check_len(input.len(), sin_out.len())?;
    check_len(input.len(), cos_out.len())?;
    sincos_blocks(input, sin_out, cos_out);
    Ok(())
}

/// Parallel [`sin_into`].
pub fn par_sin_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len(input.len(), output.len())?;
    par_map_blocks(input, output, super::sin::<BLOCK>);
    Ok(())
}

/// Parallel [`cos_into`].
pub fn par_cos_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len(input.len(), output.len())?;
    par_map_blocks(input, output, super::cos::<BLOCK>);
    Ok(())
}

/// Parallel [`sincos_into`].
pub fn par_sincos_into(input: &[f32], sin_out: &mut [f32], cos_out: &mut [f32]) -> Result<()> {
    check_len(input.len(), sin_out.len())?;
    check_len(input.len(), cos_out.len())?;

    if input.len() <= PARALLEL_THRESHOLD {
        sincos_blocks(input, sin_out, cos_out);
        return Ok(());
    }

    sin_out
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(cos_out.par_chunks_mut(PARALLEL_CHUNK_SIZE))
        .zip(input.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((s, c), src)| sincos_blocks(src, s, c));

    Ok(())
}
