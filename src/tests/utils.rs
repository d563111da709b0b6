use rand::Rng;

use crate::{buffer::RasterBuffer, params::ParameterSet};

pub fn gen_random_buffer(size: usize) -> RasterBuffer {
    let mut rng = rand::rng();
    let data = (0..size * size * 4).map(|_| rng.random::<u8>()).collect();
    RasterBuffer::from_raw(size as u32, size as u32, data)
}

/// Random RGB over a fully opaque alpha plane.
pub fn gen_opaque_buffer(size: usize) -> RasterBuffer {
    let mut rng = rand::rng();
    let data = (0..size * size * 4)
        .map(|idx| {
            if idx % 4 == 3 {
                255
            } else {
                rng.random::<u8>()
            }
        })
        .collect();
    RasterBuffer::from_raw(size as u32, size as u32, data)
}

pub fn uniform_buffer(width: u32, height: u32, rgba: [u8; 4]) -> RasterBuffer {
    RasterBuffer::filled(width, height, rgba)
}

pub fn params(pairs: &[(&str, f64)]) -> ParameterSet {
    let mut set = ParameterSet::new();
    for (name, value) in pairs {
        set.set(name, *value);
    }
    set
}
