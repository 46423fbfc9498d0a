//! Mask cleanup and selection of the dominant blob.

use image::{imageops, GrayImage};
use imageproc::{
    contours::{find_contours, BorderType, Contour},
    distance_transform::Norm,
    morphology::{dilate, erode},
    point::Point,
};

/// The largest external contour found in a mask.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub area: f64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Blob {
    /// Center of the bounding box, rounded towards the top-left.
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    fn from_contour(contour: &Contour<i32>) -> Option<Self> {
        let first = contour.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &contour.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            area: polygon_area(&contour.points),
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }
}

/// One erosion followed by one dilation with a 3x3 square.
#[must_use]
pub fn denoise(mask: &GrayImage) -> GrayImage {
    dilate(&erode(mask, Norm::LInf, 1), Norm::LInf, 1)
}

/// Shoelace area of a closed polygon.
#[must_use]
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let area = twice.abs() as f64 / 2.0;
    area
}

/// Surrounds the mask with one row and column of background on every side.
///
/// Contour tracing reports regions touching the image border as holes, so
/// without the frame a marker held at the edge would never be outermost.
fn with_background_border(mask: &GrayImage) -> GrayImage {
    let mut framed = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut framed, mask, 1, 1);
    framed
}

/// Largest outermost blob whose contour area is strictly above `min_area`.
#[must_use]
pub fn largest_blob(mask: &GrayImage, min_area: f64) -> Option<Blob> {
    find_contours::<i32>(&with_background_border(mask))
        .iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .filter_map(Blob::from_contour)
        .map(|blob| Blob {
            x: blob.x - 1,
            y: blob.y - 1,
            ..blob
        })
        .max_by(|a, b| a.area.total_cmp(&b.area))
        .filter(|blob| blob.area > min_area)
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use super::*;

    fn mask_with_rect(x: u32, y: u32, w: u32, h: u32) -> GrayImage {
        let mut mask = GrayImage::new(120, 90);
        for px in x..x + w {
            for py in y..y + h {
                mask.put_pixel(px, py, Luma([255]));
            }
        }
        mask
    }

    #[test]
    fn test_polygon_area_square() {
        let square = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert!((polygon_area(&square) - 100.0).abs() < f64::EPSILON);
        assert!(polygon_area(&square[..2]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_denoise_removes_specks_keeps_blocks() {
        let mut mask = mask_with_rect(20, 20, 30, 30);
        mask.put_pixel(100, 10, Luma([255]));
        let clean = denoise(&mask);
        assert_eq!(clean.get_pixel(100, 10).0[0], 0);
        assert_eq!(clean.get_pixel(35, 35).0[0], 255);
        assert_eq!(clean.get_pixel(20, 20).0[0], 255);
        assert_eq!(clean.get_pixel(49, 49).0[0], 255);
    }

    #[test]
    fn test_largest_blob_bounding_box() {
        let mask = mask_with_rect(10, 20, 30, 40);
        let blob = largest_blob(&mask, 300.0).unwrap();
        assert_eq!((blob.x, blob.y, blob.width, blob.height), (10, 20, 30, 40));
        assert_eq!(blob.center(), (25, 40));
        // traced through pixel centers: 29 x 39
        assert!((blob.area - 1131.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_largest_blob_prefers_bigger_region() {
        let mut mask = mask_with_rect(5, 5, 20, 20);
        for px in 60..110 {
            for py in 30..80 {
                mask.put_pixel(px, py, Luma([255]));
            }
        }
        let blob = largest_blob(&mask, 300.0).unwrap();
        assert_eq!((blob.x, blob.y), (60, 30));
    }

    #[test]
    fn test_small_blob_rejected() {
        // 17 x 17 traced area is 16 * 16 = 256
        let mask = mask_with_rect(30, 30, 17, 17);
        assert!(largest_blob(&mask, 300.0).is_none());
        assert!(largest_blob(&GrayImage::new(40, 40), 300.0).is_none());
    }

    #[test]
    fn test_hole_does_not_split_blob() {
        let mut mask = mask_with_rect(10, 10, 60, 60);
        for px in 30..50 {
            for py in 30..50 {
                mask.put_pixel(px, py, Luma([0]));
            }
        }
        let blob = largest_blob(&mask, 300.0).unwrap();
        assert_eq!((blob.width, blob.height), (60, 60));
    }

    #[test]
    fn test_blob_touching_each_edge() {
        let cases = [
            ((0, 30, 40, 40), (0, 30)),
            ((80, 30, 40, 40), (80, 30)),
            ((40, 0, 40, 40), (40, 0)),
            ((40, 50, 40, 40), (40, 50)),
        ];
        for ((x, y, w, h), corner) in cases {
            let blob = largest_blob(&mask_with_rect(x, y, w, h), 300.0)
                .unwrap_or_else(|| panic!("no blob at {x},{y}"));
            assert_eq!((blob.x, blob.y), corner);
            assert_eq!((blob.width, blob.height), (40, 40));
            assert!((blob.area - 1521.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_full_mask_is_one_blob() {
        let blob = largest_blob(&mask_with_rect(0, 0, 120, 90), 300.0).unwrap();
        assert_eq!((blob.x, blob.y, blob.width, blob.height), (0, 0, 120, 90));
        assert_eq!(blob.center(), (60, 45));
    }

    #[test]
    fn test_region_inside_edge_ring_is_not_separate() {
        // ring along the border, hole inside it, small solid square in the hole
        let mut mask = mask_with_rect(0, 0, 120, 90);
        for px in 10..110 {
            for py in 10..80 {
                mask.put_pixel(px, py, Luma([0]));
            }
        }
        for px in 30..90 {
            for py in 20..70 {
                mask.put_pixel(px, py, Luma([255]));
            }
        }
        let blob = largest_blob(&mask, 300.0).unwrap();
        assert_eq!((blob.x, blob.y, blob.width, blob.height), (0, 0, 120, 90));
    }
}
