use crate::params::{
    CORRUPTION, DENSITY, DOT_SIZE, INTENSITY, ParamSpec, SEED, THRESHOLD, TILE_SIZE,
};

/// Algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ErrorDiffusion,
    Threshold,
    Stochastic,
    AreaModulation,
    Glitch,
}

/// Coarse cost hint for listing UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceClass {
    Fast,
    Moderate,
    Slow,
}

/// Coarse output-character hint for listing UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityClass {
    Clean,
    Textured,
    Destructive,
}

/// Static description of one registered algorithm: identity, family, the
/// parameters it understands and a pair of coarse UI hints.
///
/// The table below is process-wide, read-only reference data. It is never
/// mutated and carries no lifecycle beyond process start.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub performance: PerformanceClass,
    pub quality: QualityClass,
    pub tags: &'static [&'static str],
}

pub const ALGORITHMS: &[AlgorithmDescriptor] = &[
    AlgorithmDescriptor {
        id: "floyd_steinberg",
        name: "Floyd-Steinberg",
        category: Category::ErrorDiffusion,
        description: "Classic four-tap error diffusion; the reference dither look",
        params: &[INTENSITY],
        performance: PerformanceClass::Moderate,
        quality: QualityClass::Clean,
        tags: &["error-diffusion", "classic", "binary"],
    },
    AlgorithmDescriptor {
        id: "atkinson",
        name: "Atkinson",
        category: Category::ErrorDiffusion,
        description: "Six-tap diffusion that only spreads three quarters of the error, \
                      trading shadow detail for a brighter, punchier image",
        params: &[INTENSITY],
        performance: PerformanceClass::Moderate,
        quality: QualityClass::Clean,
        tags: &["error-diffusion", "retro", "binary"],
    },
    AlgorithmDescriptor {
        id: "stucki",
        name: "Stucki",
        category: Category::ErrorDiffusion,
        description: "Twelve-tap diffusion over two rows ahead; smooth gradients at a \
                      higher per-pixel cost",
        params: &[INTENSITY],
        performance: PerformanceClass::Slow,
        quality: QualityClass::Clean,
        tags: &["error-diffusion", "smooth", "binary"],
    },
    AlgorithmDescriptor {
        id: "burkes",
        name: "Burkes",
        category: Category::ErrorDiffusion,
        description: "Seven-tap simplification of Stucki covering a single row ahead",
        params: &[INTENSITY],
        performance: PerformanceClass::Moderate,
        quality: QualityClass::Clean,
        tags: &["error-diffusion", "binary"],
    },
    AlgorithmDescriptor {
        id: "sierra",
        name: "Sierra",
        category: Category::ErrorDiffusion,
        description: "Ten-tap diffusion over two rows; close to Stucki with less work",
        params: &[INTENSITY],
        performance: PerformanceClass::Moderate,
        quality: QualityClass::Clean,
        tags: &["error-diffusion", "binary"],
    },
    AlgorithmDescriptor {
        id: "bayer",
        name: "Bayer ordered",
        category: Category::Threshold,
        description: "Tiled recursive threshold matrix; the crosshatch pattern of retro \
                      print and early displays",
        params: &[INTENSITY, THRESHOLD, TILE_SIZE],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Textured,
        tags: &["ordered", "matrix", "binary"],
    },
    AlgorithmDescriptor {
        id: "blue_noise",
        name: "Blue noise",
        category: Category::Threshold,
        description: "Tiled procedural noise map without the regular Bayer crosshatch; \
                      a cheap stand-in for true void-and-cluster maps",
        params: &[INTENSITY, THRESHOLD, TILE_SIZE, SEED],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Textured,
        tags: &["ordered", "noise", "binary"],
    },
    AlgorithmDescriptor {
        id: "random",
        name: "White noise",
        category: Category::Stochastic,
        description: "Per-pixel random threshold from a seeded generator; same seed, \
                      same image, same output",
        params: &[INTENSITY, SEED],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Textured,
        tags: &["noise", "seeded", "binary"],
    },
    AlgorithmDescriptor {
        id: "halftone",
        name: "Halftone",
        category: Category::AreaModulation,
        description: "Block-averaged dot growth approximating a printer's halftone screen",
        params: &[INTENSITY, DOT_SIZE],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Textured,
        tags: &["halftone", "blocks", "binary"],
    },
    AlgorithmDescriptor {
        id: "stipple",
        name: "Stipple",
        category: Category::AreaModulation,
        description: "Sparse dot placement on a white ground, dot size driven by darkness",
        params: &[INTENSITY, DENSITY],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Textured,
        tags: &["stipple", "dots", "sketch"],
    },
    AlgorithmDescriptor {
        id: "pixel_sort",
        name: "Pixel sort",
        category: Category::Glitch,
        description: "Swaps bright pixels sideways at random offsets; smears highlights \
                      into glitch streaks",
        params: &[INTENSITY, THRESHOLD, SEED],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Destructive,
        tags: &["glitch", "artistic", "stochastic"],
    },
    AlgorithmDescriptor {
        id: "databend",
        name: "Databend",
        category: Category::Glitch,
        description: "Random red-channel corruption events: scrambles, shifts, block \
                      noise and duplicates",
        params: &[INTENSITY, CORRUPTION, SEED],
        performance: PerformanceClass::Fast,
        quality: QualityClass::Destructive,
        tags: &["glitch", "corruption", "stochastic"],
    },
];

/// Descriptor lookup by registry id.
pub fn descriptor(id: &str) -> Option<&'static AlgorithmDescriptor> {
    ALGORITHMS.iter().find(|descriptor| descriptor.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_lookup() {
        assert!(descriptor("floyd_steinberg").is_some());
        assert!(descriptor("does_not_exist").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in ALGORITHMS.iter().enumerate() {
            for b in &ALGORITHMS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_schema_names_intensity() {
        // every algorithm scales with intensity one way or another
        for descriptor in ALGORITHMS {
            assert!(
                descriptor.params.iter().any(|p| p.name == INTENSITY.name),
                "{} schema is missing intensity",
                descriptor.id
            );
        }
    }
}
