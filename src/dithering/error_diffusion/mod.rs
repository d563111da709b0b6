use crate::{
    buffer::RasterBuffer,
    params::{self, ParameterSet},
    utils::iterator::GridIterator,
};
use kernels::Tap;

pub mod kernels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDiffusion {
    FloydSteinberg,
    Atkinson,
    Stucki,
    Burkes,
    Sierra,
}

impl ErrorDiffusion {
    pub fn kernel(self) -> &'static [Tap] {
        match self {
            ErrorDiffusion::FloydSteinberg => kernels::FLOYD_STEINBERG,
            ErrorDiffusion::Atkinson => kernels::ATKINSON,
            ErrorDiffusion::Stucki => kernels::STUCKI,
            ErrorDiffusion::Burkes => kernels::BURKES,
            ErrorDiffusion::Sierra => kernels::SIERRA,
        }
    }

    /// Shared diffusion sweep, in raster order (no serpentine).
    ///
    /// Each pixel is binarized at 128, the signed quantization error is
    /// scaled by intensity and spread over the kernel taps. Taps that land
    /// outside the buffer are dropped, so energy is not conserved at image
    /// borders.
    pub fn dither(self, buffer: &mut RasterBuffer, params: &ParameterSet) {
        let strength = (params.resolve(&params::INTENSITY) / 100.0) as f32;
        let kernel = self.kernel();

        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        for (x, y, _) in GridIterator::new(width, height) {
            let level = buffer.luma_at(x, y);
            let new_level = if level < 128 { 0 } else { 255 };
            let error = (level as f32 - new_level as f32) * strength;

            for &(dx, dy, weight) in kernel {
                buffer.add_rgb(x as isize + dx, y as isize + dy, error * weight);
            }

            buffer.set_gray(x, y, new_level);
        }
    }
}
