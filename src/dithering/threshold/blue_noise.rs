use std::f32::consts::TAU;

use crate::utils::rng::Lcg;

/// Tileable side×side pseudo-blue-noise threshold map, values min-max
/// normalized to [0, 1].
///
/// Low-frequency sinusoids (whole cycles per tile, so the pattern stays
/// seamless under modular tiling) are broken up with seeded jitter. This is
/// a cheap real-time stand-in for a true void-and-cluster map, which needs
/// offline iterative optimization; its spectrum is only loosely blue.
pub fn pattern(side: usize, seed: u32) -> Vec<f32> {
    let mut rng = Lcg::new(seed);

    let mut values: Vec<f32> = (0..side * side)
        .map(|idx| {
            let x = (idx % side) as f32 / side as f32;
            let y = (idx / side) as f32 / side as f32;
            let wave = (TAU * 2.0 * x).sin() + (TAU * 3.0 * y).sin() + (TAU * (x + 2.0 * y)).sin();
            wave / 3.0 + (rng.uniform() - 0.5)
        })
        .collect();

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(f32::EPSILON);
    for value in &mut values {
        *value = (*value - min) / span;
    }
    values
}
