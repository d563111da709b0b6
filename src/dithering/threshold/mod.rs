use crate::{
    buffer::RasterBuffer,
    params::{self, ParameterSet},
    utils::iterator::GridIterator,
};

/// Tile sides a reference matrix exists for.
const SUPPORTED_SIDES: [usize; 4] = [2, 4, 8, 16];

pub mod blue_noise;
pub mod matrices;

/// Shared primitive for the threshold-map family: visit every pixel in
/// raster order, compare its luminance against a spatially varying
/// threshold and snap it to black or white. Alpha is untouched.
///
/// The closure is invoked exactly once per pixel, in raster order; the
/// stochastic thresholder relies on that to stay deterministic per seed.
pub(crate) fn threshold_sweep(
    buffer: &mut RasterBuffer,
    mut threshold_at: impl FnMut(usize, usize) -> f32,
) {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    for (x, y, _) in GridIterator::new(width, height) {
        let level = buffer.luma_at(x, y) as f32;
        let new_level = if level > threshold_at(x, y) { 255 } else { 0 };
        buffer.set_gray(x, y, new_level);
    }
}

/// Ordered dithering against a tiled Bayer matrix.
///
/// The requested tile size is snapped to the nearest supported side
/// (2, 4, 8 or 16) before the matrix is generated.
pub fn bayer(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let side = snap_side(params.resolve(&params::TILE_SIZE));
    let matrix = matrices::bayer_matrix(side);
    tiled_threshold(buffer, &matrix, side, params);
}

/// Ordered dithering against a tiled procedural pseudo-blue-noise map.
pub fn blue_noise(buffer: &mut RasterBuffer, params: &ParameterSet) {
    // any side tiles fine through the modulo lookup; the clamp only guards
    // the side² pattern allocation
    let side = (params.resolve(&params::TILE_SIZE) as usize).clamp(2, 64);
    let seed = params.resolve(&params::SEED) as u32;
    let pattern = blue_noise::pattern(side, seed);
    tiled_threshold(buffer, &pattern, side, params);
}

/// Tile a normalized threshold map over the image by modular indexing.
///
/// Map values are centered on 0.5 and fanned out over the sample range by
/// intensity, around the base threshold.
fn tiled_threshold(buffer: &mut RasterBuffer, map: &[f32], side: usize, params: &ParameterSet) {
    let base = params.resolve(&params::THRESHOLD) as f32;
    let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;

    threshold_sweep(buffer, |x, y| {
        let value = map[(y % side) * side + (x % side)];
        base + (value - 0.5) * 255.0 * strength
    });
}

/// Nearest supported matrix side to the requested tile size, the smaller
/// side winning ties.
fn snap_side(requested: f64) -> usize {
    let requested = requested.max(0.0) as usize;
    SUPPORTED_SIDES
        .into_iter()
        .min_by_key(|side| side.abs_diff(requested))
        .unwrap_or(SUPPORTED_SIDES[0])
}
