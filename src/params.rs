use std::collections::BTreeMap;

/// Value range, default and slider step for one algorithm parameter.
///
/// These records are static reference data consumed by UI listing code;
/// the engine itself only reads `name` and `default`. Out-of-range values
/// are applied as given (callers are expected to clamp against min/max),
/// which can look extreme but never corrupts the buffer since every sample
/// write is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

/// Scales diffusion error and threshold spread, in percent.
pub const INTENSITY: ParamSpec = ParamSpec {
    name: "intensity",
    min: 0.0,
    max: 100.0,
    default: 100.0,
    step: 1.0,
};

/// Base comparison value for luminance gates.
pub const THRESHOLD: ParamSpec = ParamSpec {
    name: "threshold",
    min: 0.0,
    max: 255.0,
    default: 128.0,
    step: 1.0,
};

/// Seed for the reproducible stochastic algorithms.
pub const SEED: ParamSpec = ParamSpec {
    name: "seed",
    min: 0.0,
    max: 2_147_483_647.0,
    default: 0.0,
    step: 1.0,
};

/// Side length of a tiled threshold pattern.
pub const TILE_SIZE: ParamSpec = ParamSpec {
    name: "tile_size",
    min: 2.0,
    max: 16.0,
    default: 8.0,
    step: 1.0,
};

/// Halftone block side length.
pub const DOT_SIZE: ParamSpec = ParamSpec {
    name: "dot_size",
    min: 1.0,
    max: 32.0,
    default: 8.0,
    step: 1.0,
};

/// Stipple sample-grid spacing.
pub const DENSITY: ParamSpec = ParamSpec {
    name: "density",
    min: 2.0,
    max: 32.0,
    default: 10.0,
    step: 1.0,
};

/// Databend severity.
pub const CORRUPTION: ParamSpec = ParamSpec {
    name: "corruption",
    min: 0.0,
    max: 100.0,
    default: 50.0,
    step: 1.0,
};

/// Per-invocation parameter overrides, name -> value.
///
/// Anything not supplied falls back to the [ParamSpec] default at the point
/// of use ([ParameterSet::resolve]). Whether a value was supplied at all is
/// observable through [ParameterSet::get]; the glitch family keys its
/// seeding behavior off that distinction.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Builder-style [ParameterSet::set].
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Supplied value for the spec's parameter, or its default.
    pub fn resolve(&self, spec: &ParamSpec) -> f64 {
        self.get(spec.name).unwrap_or(spec.default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
