//! Diagnostic drawing on the processed camera frame.

use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_hollow_rect_mut},
    rect::Rect,
};

use super::{blob::Blob, zone::DeadZone};

pub const BLOB_BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const CENTER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const DEAD_ZONE_COLOR: Rgb<u8> = Rgb([0, 200, 255]);
pub const CENTER_RADIUS: i32 = 5;

fn rect_between(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    let width = u32::try_from(right - left + 1).unwrap_or(1).max(1);
    let height = u32::try_from(bottom - top + 1).unwrap_or(1).max(1);
    Rect::at(left, top).of_size(width, height)
}

/// Outlines the blob with a two pixel box, marks its center and draws the dead zone.
/// Nothing is drawn when no blob was found.
pub fn draw_overlay(frame: &mut RgbImage, blob: Option<&Blob>, zone: &DeadZone) {
    let Some(blob) = blob else {
        return;
    };
    let (right, bottom) = (blob.x + blob.width, blob.y + blob.height);
    draw_hollow_rect_mut(frame, rect_between(blob.x, blob.y, right, bottom), BLOB_BOX_COLOR);
    draw_hollow_rect_mut(
        frame,
        rect_between(blob.x + 1, blob.y + 1, right - 1, bottom - 1),
        BLOB_BOX_COLOR,
    );
    draw_filled_circle_mut(frame, blob.center(), CENTER_RADIUS, CENTER_COLOR);
    draw_hollow_rect_mut(
        frame,
        rect_between(zone.left, zone.top, zone.right, zone.bottom),
        DEAD_ZONE_COLOR,
    );
}
