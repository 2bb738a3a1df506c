/// Inline-embedding helpers: the studio never stores uploads, so every
/// image and the report download travel inside the page as data URIs.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, RgbImage};

use leafmedic::{encode_png, ImageError};

pub fn png_data_uri(image: &DynamicImage) -> Result<String, ImageError> {
    let png = encode_png(image)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

pub fn rgb_data_uri(image: &RgbImage) -> Result<String, ImageError> {
    png_data_uri(&DynamicImage::ImageRgb8(image.clone()))
}

pub fn text_data_uri(text: &str) -> String {
    format!("data:text/plain;charset=utf-8;base64,{}", STANDARD.encode(text.as_bytes()))
}
