use itertools::Itertools;

/// Raw index matrices from the standard recursive Bayer construction,
/// stored row-major. Each side-n table is a permutation of 0..n².
pub const BAYER2: [u32; 4] = [
    0, 2, //
    3, 1,
];

pub const BAYER4: [u32; 16] = [
    0, 8, 2, 10, //
    12, 4, 14, 6, //
    3, 11, 1, 9, //
    15, 7, 13, 5,
];

pub const BAYER8: [u32; 64] = [
    0, 32, 8, 40, 2, 34, 10, 42, //
    48, 16, 56, 24, 50, 18, 58, 26, //
    12, 44, 4, 36, 14, 46, 6, 38, //
    60, 28, 52, 20, 62, 30, 54, 22, //
    3, 35, 11, 43, 1, 33, 9, 41, //
    51, 19, 59, 27, 49, 17, 57, 25, //
    15, 47, 7, 39, 13, 45, 5, 37, //
    63, 31, 55, 23, 61, 29, 53, 21,
];

/// Normalized threshold matrix for a supported side length (2, 4, 8 or 16),
/// row-major, values in [0, 1).
///
/// Raw indices are divided by the entry count so a full tile of thresholds
/// covers the output range evenly; skipping that step would bias the whole
/// image bright.
///
/// # Panics
/// This function will panic on an unsupported side length. Callers snap the
/// requested tile size onto the supported set first.
pub fn bayer_matrix(side: usize) -> Vec<f32> {
    let raw = match side {
        2 => BAYER2.to_vec(),
        4 => BAYER4.to_vec(),
        8 => BAYER8.to_vec(),
        16 => expand(&BAYER8, 8),
        _ => panic!("unsupported bayer matrix side {}", side),
    };
    normalize(&raw)
}

/// One step of the recursive construction: B(2n) from B(n) by quadrant,
///
/// > | 4M     4M + 2 |
/// > | 4M + 3 4M + 1 |
fn expand(base: &[u32], side: usize) -> Vec<u32> {
    let doubled = side * 2;
    (0..doubled * doubled)
        .map(|idx| {
            let (x, y) = (idx % doubled, idx / doubled);
            let quadrant = match (x >= side, y >= side) {
                (false, false) => 0,
                (true, false) => 2,
                (false, true) => 3,
                (true, true) => 1,
            };
            4 * base[(y % side) * side + (x % side)] + quadrant
        })
        .collect_vec()
}

fn normalize(raw: &[u32]) -> Vec<f32> {
    let scale = raw.len() as f32;
    raw.iter().map(|&value| value as f32 / scale).collect_vec()
}
