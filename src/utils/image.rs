use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

pub fn read_image<P: AsRef<Path>>(path: P) -> crate::error::Result<DynamicImage> {
    Ok(ImageReader::open(path)?.decode()?)
}

pub fn write_image<P: AsRef<Path>>(
    image: &DynamicImage,
    path: P,
    image_format: ImageFormat,
) -> crate::error::Result {
    let mut file = std::fs::File::create(path)?;
    image.write_to(&mut file, image_format)?;
    Ok(())
}
