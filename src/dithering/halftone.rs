use itertools::iproduct;

use crate::{
    buffer::RasterBuffer,
    params::{self, ParameterSet},
};

/// Block-average halftone: partition the image into dot_size × dot_size
/// blocks (the last row/column clipped at the edge), average each block's
/// luminance and refill it black-first in raster-priority order.
///
/// The fill count is `(avg / 255) * dot_size² * intensity`, so a block's
/// average tone maps onto a proportional pixel count rather than a round
/// dot. Crude dot growth, not a true circular halftone screen.
pub fn halftone(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;
    let dot = (params.resolve(&params::DOT_SIZE).max(1.0)) as usize;

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;

    for (block_y, block_x) in iproduct!((0..height).step_by(dot), (0..width).step_by(dot)) {
        let block_w = dot.min(width - block_x);
        let block_h = dot.min(height - block_y);

        let mut sum = 0u32;
        for (dy, dx) in iproduct!(0..block_h, 0..block_w) {
            sum += buffer.luma_at(block_x + dx, block_y + dy) as u32;
        }
        let average = sum as f32 / (block_w * block_h) as f32;
        let mut fill = ((average / 255.0) * (dot * dot) as f32 * strength).round() as u32;

        // raster-priority fill: dy * dot + dx ascending
        for (dy, dx) in iproduct!(0..block_h, 0..block_w) {
            let level = if fill > 0 {
                fill -= 1;
                0
            } else {
                255
            };
            buffer.set_gray(block_x + dx, block_y + dy, level);
        }
    }
}

/// Stipple: clear the image to paper white, sample luminance on a
/// density-spaced grid and paint a black square at every dark sample,
/// sized by how far below the midpoint the sample sits.
///
/// Pixels between samples stay white, giving the sparse pen-drawn look.
pub fn stipple(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;
    let density = (params.resolve(&params::DENSITY).max(1.0)) as usize;

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;

    // luminance snapshot at the sample points, then clear to white
    let samples: Vec<u8> = iproduct!((0..height).step_by(density), (0..width).step_by(density))
        .map(|(y, x)| buffer.luma_at(x, y))
        .collect();
    for pixel in buffer.as_mut().chunks_exact_mut(4) {
        pixel[..3].fill(255);
    }

    let grid = iproduct!((0..height).step_by(density), (0..width).step_by(density));
    for ((y, x), level) in grid.zip(samples) {
        if level >= 128 {
            continue;
        }
        let side =
            ((128 - level) as f32 / 128.0 * density as f32 * strength).round() as usize;
        for (dy, dx) in iproduct!(0..side, 0..side) {
            if x + dx < width && y + dy < height {
                buffer.set_gray(x + dx, y + dy, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halftone_extreme_blocks() {
        let mut black = RasterBuffer::filled(8, 8, [0, 0, 0, 255]);
        halftone(&mut black, &ParameterSet::new().with("dot_size", 4.0));
        // zero average, zero fill: everything white
        for pixel in black.as_ref().chunks_exact(4) {
            assert_eq!(&pixel[..3], &[255, 255, 255]);
        }

        let mut white = RasterBuffer::filled(8, 8, [255, 255, 255, 255]);
        halftone(&mut white, &ParameterSet::new().with("dot_size", 4.0));
        // full average fills the whole block black
        for pixel in white.as_ref().chunks_exact(4) {
            assert_eq!(&pixel[..3], &[0, 0, 0]);
        }
    }

    #[test]
    fn test_halftone_partial_fill_is_raster_ordered() {
        // average 127.5 -> fill count round(0.5 * 4) = 2 of a 2x2 block
        let mut buffer = RasterBuffer::filled(2, 2, [128, 128, 128, 255]);
        let idx = buffer.pixel_idx(1, 1);
        buffer.as_mut()[idx..idx + 3].fill(126);

        halftone(&mut buffer, &ParameterSet::new().with("dot_size", 2.0));

        // the top row is filled first
        assert_eq!(buffer.luma_at(0, 0), 0);
        assert_eq!(buffer.luma_at(1, 0), 0);
        assert_eq!(buffer.luma_at(0, 1), 255);
        assert_eq!(buffer.luma_at(1, 1), 255);
    }

    #[test]
    fn test_stipple_clears_to_white_between_samples() {
        let mut buffer = RasterBuffer::filled(9, 9, [255, 255, 255, 255]);
        stipple(&mut buffer, &ParameterSet::new().with("density", 3.0));
        // bright samples paint nothing, the ground stays white
        for pixel in buffer.as_ref().chunks_exact(4) {
            assert_eq!(&pixel[..3], &[255, 255, 255]);
        }
    }

    #[test]
    fn test_stipple_dark_image_fills_solid() {
        // black samples paint density-sized squares: full coverage
        let mut buffer = RasterBuffer::filled(8, 8, [0, 0, 0, 255]);
        stipple(&mut buffer, &ParameterSet::new().with("density", 4.0));
        for pixel in buffer.as_ref().chunks_exact(4) {
            assert_eq!(&pixel[..3], &[0, 0, 0]);
        }
    }
}
