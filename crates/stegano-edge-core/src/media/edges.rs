//! Edge detection on gray images.
//!
//! [`Canny`] follows the classic recipe: 3x3 Sobel gradients with replicated
//! borders, L1 magnitude, non-maximum suppression in four direction sectors and
//! hysteresis over 8-connected neighbours.

use image::{GrayImage, Luma, RgbImage};

use crate::bit_packer::BitWidth;
use crate::sites::EdgeThresholds;

/// Binary edge mask, a non zero pixel marks an edge
pub type EdgeMask = GrayImage;

const EDGE: u8 = u8::MAX;

/// Detects edges on a gray image
pub trait EdgeDetector {
    fn detect(&self, gray: &GrayImage, thresholds: EdgeThresholds) -> EdgeMask;
}

/// luma of an RGB image with the low `ignore` bits of every sample cleared first
///
/// Uses the BT.601 weights in 14 bit fixed point.
pub fn luma_without_low_bits(image: &RgbImage, ignore: BitWidth) -> GrayImage {
    let keep = (!ignore.low_mask()) as u32;
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let luma = ((r as u32 & keep) * 4899
            + (g as u32 & keep) * 9617
            + (b as u32 & keep) * 1868
            + (1 << 13))
            >> 14;
        Luma([luma as u8])
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canny;

/// tan(22.5°) in 15 bit fixed point
const TG22: i64 = 13573;

impl EdgeDetector for Canny {
    fn detect(&self, gray: &GrayImage, thresholds: EdgeThresholds) -> EdgeMask {
        let (width, height) = (gray.width() as usize, gray.height() as usize);
        let mut mask = EdgeMask::new(gray.width(), gray.height());
        if width == 0 || height == 0 {
            return mask;
        }

        let (gx, gy) = sobel(gray);
        let magnitude: Vec<i32> = gx.iter().zip(&gy).map(|(x, y)| x.abs() + y.abs()).collect();
        let mag_at = |x: isize, y: isize| -> i32 {
            if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
                0
            } else {
                magnitude[y as usize * width + x as usize]
            }
        };

        let low = thresholds.low() as i32;
        let high = thresholds.high() as i32;
        let mut candidate = vec![false; width * height];
        let mut stack = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                let m = magnitude[i];
                if m <= low {
                    continue;
                }
                let (xi, yi) = (x as isize, y as isize);
                let xs = gx[i].abs() as i64;
                let ys = (gy[i].abs() as i64) << 15;
                let tg22x = xs * TG22;

                let is_max = if ys < tg22x {
                    m > mag_at(xi - 1, yi) && m >= mag_at(xi + 1, yi)
                } else if ys > tg22x + (xs << 16) {
                    m > mag_at(xi, yi - 1) && m >= mag_at(xi, yi + 1)
                } else {
                    let s = if (gx[i] ^ gy[i]) < 0 { -1 } else { 1 };
                    m > mag_at(xi - s, yi - 1) && m > mag_at(xi + s, yi + 1)
                };

                if is_max {
                    candidate[i] = true;
                    if m > high {
                        mask.put_pixel(x as u32, y as u32, Luma([EDGE]));
                        stack.push((x, y));
                    }
                }
            }
        }

        // hysteresis, grow strong edges into connected candidates
        while let Some((x, y)) = stack.pop() {
            for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    if candidate[ny * width + nx] && mask.get_pixel(nx as u32, ny as u32).0[0] == 0
                    {
                        mask.put_pixel(nx as u32, ny as u32, Luma([EDGE]));
                        stack.push((nx, ny));
                    }
                }
            }
        }

        mask
    }
}

/// horizontal and vertical 3x3 Sobel responses, borders replicated
fn sobel(gray: &GrayImage) -> (Vec<i32>, Vec<i32>) {
    let (width, height) = (gray.width() as i64, gray.height() as i64);
    let at = |x: i64, y: i64| -> i32 {
        let x = x.clamp(0, width - 1) as u32;
        let y = y.clamp(0, height - 1) as u32;
        gray.get_pixel(x, y).0[0] as i32
    };

    let capacity = (width * height) as usize;
    let (mut gx, mut gy) = (Vec::with_capacity(capacity), Vec::with_capacity(capacity));
    for y in 0..height {
        for x in 0..width {
            gx.push(
                at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1)
                    - at(x - 1, y - 1)
                    - 2 * at(x - 1, y)
                    - at(x - 1, y + 1),
            );
            gy.push(
                at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1)
                    - at(x - 1, y - 1)
                    - 2 * at(x, y - 1)
                    - at(x + 1, y - 1),
            );
        }
    }

    (gx, gy)
}
