use std::env;

use ditherbend::{config::ProcessConfig, error::Result, utils::image as image_utils};

fn main() -> Result {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: ditherbend <input-image> <output-image> <config.json>");
        std::process::exit(2);
    }

    let image = image_utils::read_image(&args[1])?;
    let config = ProcessConfig::read_config(&args[3])?;
    let processed = ditherbend::run(&config, image)?;

    image_utils::write_image(&processed, &args[2], image::ImageFormat::Png)
}
