use crate::{
    buffer::RasterBuffer,
    params::{self, ParameterSet},
    utils::rng::Lcg,
};

use super::threshold::threshold_sweep;

/// White-noise thresholding: one uniform draw per pixel in raster order,
/// spread around the 128 midpoint by intensity.
///
/// Driven by the [Lcg]; a pinned seed reproduces the exact output, and
/// callers reusing one seed across frames get temporally stable noise.
pub fn dither(buffer: &mut RasterBuffer, params: &ParameterSet) {
    let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;
    let mut rng = Lcg::new(params.resolve(&params::SEED) as u32);

    threshold_sweep(buffer, |_, _| {
        128.0 + (rng.uniform() - 0.5) * 255.0 * strength
    });
}
