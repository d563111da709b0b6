use crate::{buffer::RasterBuffer, params::ParameterSet};

pub mod error_diffusion;
pub mod glitch;
pub mod halftone;
pub mod random;
pub mod threshold;

use error_diffusion::ErrorDiffusion;

/// Every registered algorithm, as an exhaustive enum.
///
/// Dispatch goes through this type rather than string tags so the compiler
/// checks that each variant has a routine; the string boundary exists only
/// at [Algorithm::from_id], where registry ids arrive from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    FloydSteinberg,
    Atkinson,
    Stucki,
    Burkes,
    Sierra,
    Bayer,
    BlueNoise,
    Random,
    Halftone,
    Stipple,
    PixelSort,
    Databend,
}

impl Algorithm {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "floyd_steinberg" => Some(Self::FloydSteinberg),
            "atkinson" => Some(Self::Atkinson),
            "stucki" => Some(Self::Stucki),
            "burkes" => Some(Self::Burkes),
            "sierra" => Some(Self::Sierra),
            "bayer" => Some(Self::Bayer),
            "blue_noise" => Some(Self::BlueNoise),
            "random" => Some(Self::Random),
            "halftone" => Some(Self::Halftone),
            "stipple" => Some(Self::Stipple),
            "pixel_sort" => Some(Self::PixelSort),
            "databend" => Some(Self::Databend),
            _ => None,
        }
    }

    /// Registry id of this algorithm.
    pub fn id(self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd_steinberg",
            Self::Atkinson => "atkinson",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::Bayer => "bayer",
            Self::BlueNoise => "blue_noise",
            Self::Random => "random",
            Self::Halftone => "halftone",
            Self::Stipple => "stipple",
            Self::PixelSort => "pixel_sort",
            Self::Databend => "databend",
        }
    }

    /// Apply this algorithm to the buffer in place.
    pub fn apply(self, buffer: &mut RasterBuffer, params: &ParameterSet) {
        match self {
            Self::FloydSteinberg => ErrorDiffusion::FloydSteinberg.dither(buffer, params),
            Self::Atkinson => ErrorDiffusion::Atkinson.dither(buffer, params),
            Self::Stucki => ErrorDiffusion::Stucki.dither(buffer, params),
            Self::Burkes => ErrorDiffusion::Burkes.dither(buffer, params),
            Self::Sierra => ErrorDiffusion::Sierra.dither(buffer, params),
            Self::Bayer => threshold::bayer(buffer, params),
            Self::BlueNoise => threshold::blue_noise(buffer, params),
            Self::Random => random::dither(buffer, params),
            Self::Halftone => halftone::halftone(buffer, params),
            Self::Stipple => halftone::stipple(buffer, params),
            Self::PixelSort => glitch::pixel_sort(buffer, params),
            Self::Databend => glitch::databend(buffer, params),
        }
    }
}

/// Sole engine entry point: copy the source buffer, apply the algorithm
/// named by `algorithm_id` to the copy, and return it.
///
/// The caller's buffer is never mutated. An id that matches no registered
/// algorithm is recoverable: it logs a warning and the untouched copy comes
/// back, dimensions intact. Nothing in here performs I/O or touches state
/// beyond the returned buffer.
pub fn process(source: &RasterBuffer, algorithm_id: &str, params: &ParameterSet) -> RasterBuffer {
    let mut buffer = source.clone();
    match Algorithm::from_id(algorithm_id) {
        Some(algorithm) => algorithm.apply(&mut buffer, params),
        None => log::warn!("unknown dithering algorithm {algorithm_id:?}, image left untouched"),
    }
    buffer
}
