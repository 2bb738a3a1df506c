//! Leaf-spot detection on an enhanced image: Otsu threshold, then the
//! bounding box of every external contour.

use image::{Rgb, RgbImage};
use imageproc::contours::{find_contours, Contour};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::Serialize;

use crate::enhance::luma_bt601;

const SPOT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const OUTLINE_THICKNESS: u32 = 2;

/// Axis-aligned bounding box of one detected spot, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpotBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub fn detect_spots(image: &RgbImage) -> Vec<SpotBox> {
    let gray = luma_bt601(image);
    let level = otsu_level(&gray);
    let mask = threshold(&gray, level, ThresholdType::Binary);

    find_contours::<u32>(&mask)
        .iter()
        .filter(|c| c.parent.is_none())
        .filter_map(bounding_box)
        .collect()
}

fn bounding_box(contour: &Contour<u32>) -> Option<SpotBox> {
    let first = contour.points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &contour.points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(SpotBox { x: min_x, y: min_y, width: max_x - min_x + 1, height: max_y - min_y + 1 })
}

/// Copy of `image` with every spot outlined in red.
pub fn draw_overlay(image: &RgbImage, spots: &[SpotBox]) -> RgbImage {
    let mut overlay = image.clone();
    for spot in spots {
        for inset in 0..OUTLINE_THICKNESS {
            let width = spot.width.saturating_sub(2 * inset);
            let height = spot.height.saturating_sub(2 * inset);
            if width == 0 || height == 0 {
                break;
            }
            let rect = Rect::at((spot.x + inset) as i32, (spot.y + inset) as i32).of_size(width, height);
            draw_hollow_rect_mut(&mut overlay, rect, SPOT_COLOR);
        }
    }
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_squares() -> RgbImage {
        let mut img = RgbImage::new(64, 48);
        for (x0, y0, side) in [(5u32, 6u32, 10u32), (40, 20, 8)] {
            for y in y0..y0 + side {
                for x in x0..x0 + side {
                    img.put_pixel(x, y, Rgb([255, 255, 255]));
                }
            }
        }
        img
    }

    #[test]
    fn finds_each_bright_square() {
        let mut spots = detect_spots(&two_squares());
        spots.sort_by_key(|s| (s.x, s.y));
        assert_eq!(
            spots,
            vec![
                SpotBox { x: 5, y: 6, width: 10, height: 10 },
                SpotBox { x: 40, y: 20, width: 8, height: 8 },
            ]
        );
    }

    #[test]
    fn dim_spot_on_dark_background_is_found() {
        let mut img = RgbImage::from_pixel(40, 30, Rgb([40, 40, 40]));
        for y in 12..18 {
            for x in 20..29 {
                img.put_pixel(x, y, Rgb([200, 60, 60]));
            }
        }
        assert_eq!(detect_spots(&img), vec![SpotBox { x: 20, y: 12, width: 9, height: 6 }]);
    }

    #[test]
    fn holes_do_not_produce_extra_spots() {
        let mut img = RgbImage::new(30, 30);
        for y in 5..25 {
            for x in 5..25 {
                let ring = !(10..20).contains(&x) || !(10..20).contains(&y);
                if ring {
                    img.put_pixel(x, y, Rgb([255, 255, 255]));
                }
            }
        }
        assert_eq!(detect_spots(&img), vec![SpotBox { x: 5, y: 5, width: 20, height: 20 }]);
    }

    #[test]
    fn overlay_outlines_spots_in_red() {
        let img = two_squares();
        let spots = detect_spots(&img);
        let overlay = draw_overlay(&img, &spots);
        assert_eq!(overlay.get_pixel(5, 6), &SPOT_COLOR);
        assert_eq!(overlay.get_pixel(6, 7), &SPOT_COLOR);
        assert_eq!(overlay.get_pixel(10, 11), &Rgb([255, 255, 255]));
        assert_eq!(overlay.get_pixel(0, 0), &Rgb([0, 0, 0]));
        // source untouched
        assert_eq!(img.get_pixel(5, 6), &Rgb([255, 255, 255]));
    }
}
