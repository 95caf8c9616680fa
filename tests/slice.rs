//! Slice entry points: sequential and parallel variants against each other
//! and against the lane-vector functions.

use lanemat::trig::slice::{
    cos_into, par_cos_into, par_sin_into, par_sincos_into, sin_into, sincos_into,
    PARALLEL_THRESHOLD,
};
use lanemat::{trig, LaneMatError, LaneVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_inputs(seed: u64, count: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random_range(-100.0f32..100.0))
        .collect()
}

#[test]
fn test_matches_lane_functions() {
    let inputs = random_inputs(1, 37);
    let mut sin_out = vec![0.0f32; 37];
    let mut cos_out = vec![0.0f32; 37];

    sin_into(&inputs, &mut sin_out).unwrap();
    cos_into(&inputs, &mut cos_out).unwrap();

    for (i, &x) in inputs.iter().enumerate() {
        let lane = LaneVector::from_array([x]);
        assert_eq!(sin_out[i], trig::sin(lane)[0], "sin at {i}");
        assert_eq!(cos_out[i], trig::cos(lane)[0], "cos at {i}");
    }
}

#[test]
fn test_parallel_matches_sequential_above_threshold() {
    // Not a multiple of the chunk size, so the last chunk has a tail.
    let size = PARALLEL_THRESHOLD + 12_345;
    let inputs = random_inputs(2, size);

    let mut seq = vec![0.0f32; size];
    let mut par = vec![0.0f32; size];
    sin_into(&inputs, &mut seq).unwrap();
    par_sin_into(&inputs, &mut par).unwrap();
    assert_eq!(seq, par);

    cos_into(&inputs, &mut seq).unwrap();
    par_cos_into(&inputs, &mut par).unwrap();
    assert_eq!(seq, par);

    let mut seq_sin = vec![0.0f32; size];
    let mut seq_cos = vec![0.0f32; size];
    let mut par_sin = vec![0.0f32; size];
    let mut par_cos = vec![0.0f32; size];
    sincos_into(&inputs, &mut seq_sin, &mut seq_cos).unwrap();
    par_sincos_into(&inputs, &mut par_sin, &mut par_cos).unwrap();
    assert_eq!(seq_sin, par_sin);
    assert_eq!(seq_cos, par_cos);
}

#[test]
fn test_parallel_small_input_runs_sequentially() {
    let inputs = random_inputs(3, 100);
    let mut seq = vec![0.0f32; 100];
    let mut par = vec![0.0f32; 100];

    sin_into(&inputs, &mut seq).unwrap();
    par_sin_into(&inputs, &mut par).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_length_mismatch() {
    let inputs = random_inputs(4, 10);
    let mut short = vec![0.0f32; 9];
    let mut exact = vec![0.0f32; 10];

    assert_eq!(
        par_sin_into(&inputs, &mut short),
        Err(LaneMatError::LengthMismatch {
            input: 10,
            output: 9
        })
    );
    assert!(par_sincos_into(&inputs, &mut exact, &mut short).is_err());
    assert!(cos_into(&inputs, &mut short).is_err());

    let err = sin_into(&inputs, &mut short).unwrap_err();
    assert_eq!(err.to_string(), "Length mismatch: input has 10 elements, output has 9");
}
