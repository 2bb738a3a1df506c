/// Image → network input conversion.
///
/// Resizes to `width × height`, forces RGB, and flattens as R, G, B, ...
/// normalized to [0, 1]. The result has length `width * height * 3`.
use image::imageops::{self, FilterType};
use image::DynamicImage;

pub fn image_to_rgb_input(image: &DynamicImage, width: u32, height: u32) -> Vec<f64> {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, width, height, FilterType::CatmullRom);
    resized.pixels()
        .flat_map(|p| p.0.iter().map(|&c| c as f64 / 255.0))
        .collect()
}
