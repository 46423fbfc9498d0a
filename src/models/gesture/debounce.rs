//! Rate limiting of gesture updates.

use std::time::{Duration, Instant};

use log::debug;

use crate::models::direction::Direction;

/// Last accepted gesture and when it was accepted.
#[derive(Clone, Debug)]
pub struct DetectorState {
    interval: Duration,
    last_direction: Option<Direction>,
    last_update: Option<Instant>,
}

impl DetectorState {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_direction: None,
            last_update: None,
        }
    }

    /// Feeds this frame's candidate and returns the direction to report.
    ///
    /// A candidate is accepted only when strictly more than the interval has
    /// passed since the previous acceptance. Re-accepting the current
    /// direction still restarts the interval.
    pub fn offer(&mut self, candidate: Option<Direction>, now: Instant) -> Option<Direction> {
        if let Some(direction) = candidate {
            let ready = match self.last_update {
                Some(at) => now.saturating_duration_since(at) > self.interval,
                None => true,
            };
            if ready {
                if self.last_direction != Some(direction) {
                    debug!("Gesture changed to {direction}");
                }
                self.last_direction = Some(direction);
                self.last_update = Some(now);
            }
        }
        self.last_direction
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    #[must_use]
    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }
}
