//! Tunables for the game board and the gesture detector.

use std::time::Duration;

use crate::models::gesture::hsv::HsvRange;

/// Width of the board in pixels.
pub const GAME_WIDTH: i32 = 600;
/// Height of the board in pixels.
pub const GAME_HEIGHT: i32 = 400;
/// Side of one grid cell in pixels.
pub const SPACE_SIZE: i32 = 20;
/// Board ticks per second.
pub const SPEED: u64 = 2;
/// Initial snake length.
pub const BODY_PARTS: usize = 2;

/// Width frames are scaled to before detection.
pub const FRAME_WIDTH: u32 = 320;
/// Height frames are scaled to before detection.
pub const FRAME_HEIGHT: u32 = 240;
/// Blobs with a contour area at or below this are treated as noise.
pub const MIN_BLOB_AREA: f64 = 300.0;
/// The dead zone margin is the frame dimension divided by this.
pub const DEAD_ZONE_DIVISOR: u32 = 4;
/// Minimum time between accepted gesture updates.
pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// Index of the capture device.
pub const CAMERA_INDEX: u32 = 0;

/// Board geometry and pacing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub ticks_per_second: u64,
    pub body_parts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            cell_size: SPACE_SIZE,
            ticks_per_second: SPEED,
            body_parts: BODY_PARTS,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn millis_between_ticks(&self) -> u64 {
        1000 / self.ticks_per_second.max(1)
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Whether the pixel coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

/// Parameters of the color-blob gesture pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub color: HsvRange,
    pub min_area: f64,
    pub dead_zone_divisor_x: u32,
    pub dead_zone_divisor_y: u32,
    pub debounce: Duration,
    pub camera_index: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            color: HsvRange::GREEN,
            min_area: MIN_BLOB_AREA,
            dead_zone_divisor_x: DEAD_ZONE_DIVISOR,
            dead_zone_divisor_y: DEAD_ZONE_DIVISOR,
            debounce: DEBOUNCE,
            camera_index: CAMERA_INDEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let config = GameConfig::default();
        assert_eq!(config.columns(), 30);
        assert_eq!(config.rows(), 20);
        assert_eq!(config.millis_between_ticks(), 500);
    }

    #[test]
    fn test_contains_is_half_open() {
        let config = GameConfig::default();
        assert!(config.contains((0, 0)));
        assert!(config.contains((580, 380)));
        assert!(!config.contains((600, 0)));
        assert!(!config.contains((0, 400)));
        assert!(!config.contains((-20, 40)));
    }

    #[test]
    fn test_default_detector() {
        let config = DetectorConfig::default();
        assert_eq!((config.frame_width, config.frame_height), (320, 240));
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.color, HsvRange::GREEN);
    }
}
