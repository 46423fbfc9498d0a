//! Mapping a blob position to a coarse direction.

use crate::{config::DetectorConfig, models::direction::Direction};

/// Central rectangle inside which a blob does not steer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadZone {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl DeadZone {
    /// Margins are the frame size divided by the configured divisors.
    #[must_use]
    pub fn for_frame(width: u32, height: u32, config: &DetectorConfig) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let margin_x = w / i32::try_from(config.dead_zone_divisor_x.max(1)).unwrap_or(1);
        let margin_y = h / i32::try_from(config.dead_zone_divisor_y.max(1)).unwrap_or(1);
        Self {
            left: margin_x,
            right: w - margin_x,
            top: margin_y,
            bottom: h - margin_y,
        }
    }

    /// Horizontal bands win over vertical ones when a point is in a corner.
    #[must_use]
    pub fn classify(&self, (cx, cy): (i32, i32)) -> Option<Direction> {
        if cx < self.left {
            Some(Direction::Left)
        } else if cx > self.right {
            Some(Direction::Right)
        } else if cy < self.top {
            Some(Direction::Up)
        } else if cy > self.bottom {
            Some(Direction::Down)
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, point: (i32, i32)) -> bool {
        self.classify(point).is_none()
    }
}
