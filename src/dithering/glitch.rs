use itertools::iproduct;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    buffer::RasterBuffer,
    params::{self, ParameterSet},
    utils::iterator::GridIterator,
};

/// Seeding rule for the glitch family: an explicitly supplied `seed` gives
/// reproducible output, otherwise the generator seeds from OS entropy and
/// every run looks different (the intended interactive behavior).
fn glitch_rng(params: &ParameterSet) -> StdRng {
    match params.get(params::SEED.name) {
        Some(seed) => StdRng::seed_from_u64(seed as u64),
        None => StdRng::from_os_rng(),
    }
}

/// Pixel sort: pixels brighter than the threshold swap their full RGBA
/// quadruple with a pixel a random distance to the right in the same row,
/// clamped at the row's end.
///
/// Repeated runs smear highlights further; the routine is deliberately not
/// idempotent. Zero intensity pins the offset to zero and the pass is a
/// no-op.
pub fn pixel_sort(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;
    let gate = params.resolve(&params::THRESHOLD) as f32;

    let max_offset = (5.0 * strength) as usize;
    if max_offset == 0 {
        return;
    }
    let mut rng = glitch_rng(params);

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    for (x, y, _) in GridIterator::new(width, height) {
        if buffer.luma_at(x, y) as f32 > gate {
            let offset = rng.random_range(0..=max_offset);
            let partner = (x + offset).min(width - 1);
            let (a, b) = (buffer.pixel_idx(x, y), buffer.pixel_idx(partner, y));
            buffer.swap_pixels(a, b);
        }
    }
}

/// Databend: a corruption-scaled number of random events, each hitting one
/// pixel with one of four red-channel corruptions.
///
/// > (a) random byte
/// > (b) copy from a pixel up to 5 columns away, skipped at the border
/// > (c) random bytes over a 1..=5 px square block
/// > (d) copy from a uniformly random pixel anywhere in the image
///
/// Only the red channel is touched in all four modes; a simplification kept
/// from the original effect.
pub fn databend(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let strength = params.resolve(&params::INTENSITY) / 100.0;
    let corruption = params.resolve(&params::CORRUPTION);

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let events = ((width * height) as f64 * corruption * strength / 1000.0) as usize;
    if events == 0 {
        return;
    }
    let mut rng = glitch_rng(params);

    for _ in 0..events {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let target = buffer.pixel_idx(x, y);

        match rng.random_range(0..4) {
            0 => buffer.as_mut()[target] = rng.random::<u8>(),
            1 => {
                let src_x = x as i64 + rng.random_range(-5i64..=5);
                if (0..width as i64).contains(&src_x) {
                    let sample = buffer.as_ref()[buffer.pixel_idx(src_x as usize, y)];
                    buffer.as_mut()[target] = sample;
                }
            }
            2 => {
                let side = rng.random_range(1..=5usize);
                for (dy, dx) in iproduct!(0..side, 0..side) {
                    if x + dx < width && y + dy < height {
                        let idx = buffer.pixel_idx(x + dx, y + dy);
                        buffer.as_mut()[idx] = rng.random::<u8>();
                    }
                }
            }
            _ => {
                let src_x = rng.random_range(0..width);
                let src_y = rng.random_range(0..height);
                let sample = buffer.as_ref()[buffer.pixel_idx(src_x, src_y)];
                buffer.as_mut()[target] = sample;
            }
        }
    }
}
