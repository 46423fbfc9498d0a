//! The per-frame gesture pipeline.

use std::time::Instant;

use image::{
    imageops::{self, FilterType},
    RgbImage,
};
use log::debug;

use crate::{config::DetectorConfig, models::direction::Direction};

use super::{
    blob::{denoise, largest_blob, Blob},
    debounce::DetectorState,
    hsv::threshold,
    overlay::draw_overlay,
    zone::DeadZone,
};

/// Everything one call to [`GestureDetector::detect`] produced.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Last accepted direction, after debouncing.
    pub direction: Option<Direction>,
    /// What this frame alone suggested.
    pub candidate: Option<Direction>,
    pub blob: Option<Blob>,
    /// Scaled, mirrored frame with the diagnostic overlay.
    pub frame: RgbImage,
}

/// Turns camera frames into debounced directions.
#[derive(Clone, Debug)]
pub struct GestureDetector {
    config: DetectorConfig,
    state: DetectorState,
}

impl GestureDetector {
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        let state = DetectorState::new(config.debounce);
        Self { config, state }
    }

    /// Scales to the working size and mirrors so moving right looks like moving right.
    fn prepare(&self, frame: &RgbImage) -> RgbImage {
        let (w, h) = (self.config.frame_width, self.config.frame_height);
        if frame.dimensions() == (w, h) {
            imageops::flip_horizontal(frame)
        } else {
            imageops::flip_horizontal(&imageops::resize(frame, w, h, FilterType::Triangle))
        }
    }

    /// Runs the full pipeline on one frame taken at `now`.
    pub fn detect(&mut self, frame: &RgbImage, now: Instant) -> Detection {
        let mut frame = self.prepare(frame);
        let mask = denoise(&threshold(&frame, &self.config.color));
        let blob = largest_blob(&mask, self.config.min_area);
        let zone = DeadZone::for_frame(frame.width(), frame.height(), &self.config);
        let candidate = blob.and_then(|b| zone.classify(b.center()));
        if let Some(b) = &blob {
            debug!(
                "Blob area {:.0} centered at {:?}, candidate {:?}",
                b.area,
                b.center(),
                candidate
            );
        }
        draw_overlay(&mut frame, blob.as_ref(), &zone);
        let direction = self.state.offer(candidate, now);
        Detection {
            direction,
            candidate,
            blob,
            frame,
        }
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.state.last_direction()
    }

    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
