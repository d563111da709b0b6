use ditherbend::buffer::RasterBuffer;
use rand::Rng;

pub fn gen_random_buffer(size: usize) -> RasterBuffer {
    let mut rng = rand::rng();
    let data = (0..size * size * 4).map(|_| rng.random::<u8>()).collect();
    RasterBuffer::from_raw(size as u32, size as u32, data)
}
