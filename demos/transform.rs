//! Rotates and scales a square with 3×3 homogeneous transforms.
//!
//! Run with `cargo run --release --example transform`.

use std::f32::consts::PI;

use lanemat::{make_matrix, LaneVector, Matrix, SimdTrig};

type Transform = Matrix<f32, 3, 3>;

fn rotation(theta: f32) -> Transform {
    let (s, c) = LaneVector::<f32, 1>::splat(theta).sin_cos();
    let (s, c) = (s[0], c[0]);

    make_matrix!(f32, 3, 3;
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0
    )
}

fn translation(dx: f32, dy: f32) -> Transform {
    let mut t = Transform::identity();
    t.set_col::<2>(LaneVector::from_array([dx, dy, 1.0]));
    t
}

fn scaling(k: f32) -> Transform {
    let mut t = Transform::identity() * k;
    t[(2, 2)] = 1.0;
    t
}

fn main() {
    let square = [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    // Applied right to left: scale, rotate a quarter turn, then shift.
    let transform = translation(2.0, -1.0) * rotation(PI / 2.0) * scaling(3.0);
    println!("transform =\n{transform:.3}\n");

    for [x, y] in square {
        let p = transform * LaneVector::from_array([x, y, 1.0]);
        println!("({x:>4.1}, {y:>4.1}) -> ({:>6.3}, {:>6.3})", p[0], p[1]);
    }

    // Sample one period of the angle sweep in 8-lane blocks.
    let angles: [f32; 8] = std::array::from_fn(|i| i as f32 * PI / 4.0);
    let (s, c) = LaneVector::from_array(angles).sin_cos();
    println!("\nangle     sin      cos");
    for i in 0..8 {
        println!("{:>5.3} {:>8.4} {:>8.4}", angles[i], s[i], c[i]);
    }
}
