//! Classical enhancement chain applied to every upload before display.
//!
//! The chain is fixed: resize → luma → histogram equalization → 5×5 Gaussian
//! blur → unsharp mask → replicate to RGB. Every stage allocates a new buffer;
//! the input is never modified.

pub mod spots;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::contrast::equalize_histogram;
use tracing::debug;

use crate::network::DEFAULT_INPUT_SIZE;

pub use spots::{detect_spots, draw_overlay, SpotBox};

/// Binomial taps of the size-5 Gaussian kernel with sigma derived from the
/// kernel size. Sum is 16, so a separable pass scales by 256.
const BLUR_KERNEL: [u32; 5] = [1, 4, 6, 4, 1];

/// BT.601 luma weights in 14-bit fixed point (0.299, 0.587, 0.114).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

const SHARPEN_WEIGHT: f64 = 1.5;
const BLUR_WEIGHT: f64 = -0.5;

/// Enhances `image` at the default 224×224 working resolution.
pub fn enhance(image: &DynamicImage) -> RgbImage {
    enhance_to(image, DEFAULT_INPUT_SIZE)
}

/// Enhances `image` at a `size`×`size` working resolution.
pub fn enhance_to(image: &DynamicImage, size: u32) -> RgbImage {
    let rgb = imageops::resize(&image.to_rgb8(), size, size, FilterType::CatmullRom);
    let gray = luma_bt601(&rgb);
    let equalized = equalize_histogram(&gray);
    let blurred = gaussian_blur_5(&equalized);
    let sharpened = unsharp_mask(&equalized, &blurred);

    debug!(
        src_width = image.width(),
        src_height = image.height(),
        size,
        "enhanced image"
    );
    DynamicImage::ImageLuma8(sharpened).to_rgb8()
}

/// RGB → gray with BT.601 weights, rounded the same way OpenCV's
/// `COLOR_RGB2GRAY` rounds.
pub fn luma_bt601(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let acc = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
        Luma([((acc + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8])
    })
}

/// Mirrors an out-of-range coordinate back into `0..n` without repeating
/// the edge pixel (`dcb|abcd|cba`).
fn reflect_101(i: i64, n: i64) -> usize {
    if n == 1 {
        return 0;
    }
    let mut i = i;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Separable 5×5 Gaussian blur with reflect-101 borders, rounded to 8 bits.
pub fn gaussian_blur_5(image: &GrayImage) -> GrayImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return image.clone();
    }
    let radius = (BLUR_KERNEL.len() / 2) as i64;

    let mut horizontal = vec![0u32; w as usize * h as usize];
    for y in 0..h {
        for x in 0..w {
            let acc: u32 = BLUR_KERNEL.iter().enumerate()
                .map(|(k, weight)| {
                    let sx = reflect_101(x as i64 + k as i64 - radius, w as i64) as u32;
                    weight * image.get_pixel(sx, y)[0] as u32
                })
                .sum();
            horizontal[(y * w + x) as usize] = acc;
        }
    }

    GrayImage::from_fn(w, h, |x, y| {
        let acc: u32 = BLUR_KERNEL.iter().enumerate()
            .map(|(k, weight)| {
                let sy = reflect_101(y as i64 + k as i64 - radius, h as i64) as u32;
                weight * horizontal[(sy * w + x) as usize]
            })
            .sum();
        Luma([((acc + 128) >> 8) as u8])
    })
}

/// `sharp = base * 1.5 - blurred * 0.5`, rounded and clipped to `0..=255`.
pub fn unsharp_mask(base: &GrayImage, blurred: &GrayImage) -> GrayImage {
    debug_assert_eq!(base.dimensions(), blurred.dimensions());
    GrayImage::from_fn(base.width(), base.height(), |x, y| {
        let b = base.get_pixel(x, y)[0] as f64;
        let s = blurred.get_pixel(x, y)[0] as f64;
        let v = (SHARPEN_WEIGHT * b + BLUR_WEIGHT * s).round().clamp(0.0, 255.0);
        Luma([v as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    fn gradient(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn enhance_is_deterministic() {
        let img = gradient(300, 180);
        let a = enhance(&img);
        let b = enhance(&img);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn output_is_rgb_at_working_size_for_any_input() {
        let inputs = vec![
            gradient(300, 300),
            gradient(17, 91),
            DynamicImage::ImageLuma8(GrayImage::from_pixel(50, 30, Luma([90]))),
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 480, Rgba([10, 200, 30, 128]))),
        ];
        for img in inputs {
            let out = enhance(&img);
            assert_eq!(out.dimensions(), (224, 224));
            assert_eq!(out.as_raw().len(), 224 * 224 * 3);
        }
        assert_eq!(enhance_to(&gradient(10, 10), 32).dimensions(), (32, 32));
    }

    #[test]
    fn output_channels_are_replicated() {
        let out = enhance(&gradient(120, 80));
        assert!(out.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn blur_leaves_uniform_image_unchanged() {
        let img = GrayImage::from_pixel(9, 6, Luma([137]));
        assert_eq!(gaussian_blur_5(&img), img);
    }

    #[test]
    fn blur_spreads_impulse_with_binomial_weights() {
        let mut img = GrayImage::new(9, 9);
        img.put_pixel(4, 4, Luma([255]));
        let out = gaussian_blur_5(&img);
        // 255 * 6 * 6 / 256 and 255 * 4 * 6 / 256, rounded
        assert_eq!(out.get_pixel(4, 4)[0], 36);
        assert_eq!(out.get_pixel(5, 4)[0], 24);
        assert_eq!(out.get_pixel(4, 3)[0], 24);
        assert_eq!(out.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn blur_handles_single_pixel() {
        let img = GrayImage::from_pixel(1, 1, Luma([42]));
        assert_eq!(gaussian_blur_5(&img).get_pixel(0, 0)[0], 42);
    }

    #[test]
    fn unsharp_mask_amplifies_and_clips() {
        let base = GrayImage::from_raw(4, 1, vec![100, 200, 250, 0]).unwrap();
        let blurred = GrayImage::from_pixel(4, 1, Luma([100]));
        let out = unsharp_mask(&base, &blurred);
        assert_eq!(out.as_raw(), &vec![100, 250, 255, 0]);
    }

    #[test]
    fn luma_uses_bt601_weights() {
        let img = RgbImage::from_raw(5, 1, vec![
            255, 0, 0,
            0, 255, 0,
            0, 0, 255,
            255, 255, 255,
            10, 20, 30,
        ]).unwrap();
        // 0.299*10 + 0.587*20 + 0.114*30 = 18.15
        assert_eq!(luma_bt601(&img).as_raw(), &vec![76, 150, 29, 255, 18]);
    }

    #[test]
    fn reflect_101_mirrors_without_edge_repeat() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(-3, 2), 1);
    }
}
