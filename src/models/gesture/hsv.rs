//! Color space conversion and thresholding.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Inclusive HSV bounds using the 8-bit convention: hue in `0..=179`,
/// saturation and value in `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    /// Works for most green markers under indoor lighting.
    pub const GREEN: HsvRange = HsvRange {
        lower: [29, 86, 6],
        upper: [64, 255, 255],
    };

    #[must_use]
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }
}

/// Converts one pixel to HSV with hue halved to fit a byte.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsv(Rgb([r, g, b]): Rgb<u8>) -> [u8; 3] {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = v - min;
    let s = if v > 0.0 { 255.0 * delta / v } else { 0.0 };
    let mut h = if delta == 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / delta
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }
    let h = (h / 2.0).round().min(179.0);
    [h as u8, s.round() as u8, v as u8]
}

/// Binary mask: 255 where the pixel falls inside `range`, 0 elsewhere.
#[must_use]
pub fn threshold(frame: &RgbImage, range: &HsvRange) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        if range.contains(rgb_to_hsv(*frame.get_pixel(x, y))) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
