use image::{DynamicImage, imageops::FilterType};

use crate::{buffer::RasterBuffer, config::ProcessConfig};

pub mod buffer;
pub mod config;
pub mod dithering;
pub mod error;
pub mod params;
pub mod registry;
pub mod utils;

#[cfg(test)]
mod tests;

pub use dithering::process;

pub mod prelude {
    pub use crate::buffer::RasterBuffer;
    pub use crate::dithering::{Algorithm, process};
    pub use crate::params::ParameterSet;
    pub use crate::registry::{ALGORITHMS, AlgorithmDescriptor};
}

/// Decode-side pipeline around the engine: bound the working size, apply
/// the brightness/contrast knobs, run the configured algorithm over a copy
/// of the pixels and scale the result back up for display.
///
/// The engine call in the middle ([dithering::process]) is the only part
/// that touches pixel semantics; everything else here is image-crate
/// plumbing.
pub fn run(config: &ProcessConfig, original_img: DynamicImage) -> error::Result<DynamicImage> {
    let image = original_img
        .resize(
            config.processing_width,
            config.processing_height,
            FilterType::Gaussian,
        )
        .brighten(config.brightness_delta)
        .adjust_contrast(config.contrast_delta);

    let source = RasterBuffer::from_rgba8_image(&image);
    let processed = dithering::process(&source, &config.algorithm, &config.parameters);
    let result = processed.into_rgba8_image();

    Ok(result.resize(
        result.width() * config.output_scale,
        result.height() * config.output_scale,
        FilterType::Nearest,
    ))
}
