use std::time::Instant;

use iced::{keyboard::Key, widget::image::Handle};
use log::{debug, error, info, warn};

use crate::{
    app::Message,
    config::DetectorConfig,
    models::{
        direction::Direction,
        gesture::{
            camera::{Camera, CameraError, FrameSource},
            detector::GestureDetector,
        },
    },
    view_model::ViewModel,
    views::camera::camera_screen::CameraMessage,
};

/// Pairs a frame source with the detector and keeps the last annotated frame for display.
#[derive(Debug)]
pub struct GestureViewModel {
    detector: GestureDetector,
    source: Option<Box<dyn FrameSource>>,
    last_frame: Option<Handle>,
    last_error: Option<CameraError>,
}

impl GestureViewModel {
    /// Opens the configured camera. A camera that fails to open leaves the
    /// view model inactive so the game falls back to the keyboard.
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        match Camera::open(config.camera_index) {
            Ok(camera) => Self::with_source(config, Box::new(camera)),
            Err(e) => {
                warn!("Gesture control disabled: {e}");
                Self {
                    detector: GestureDetector::new(config),
                    source: None,
                    last_frame: None,
                    last_error: Some(e),
                }
            }
        }
    }

    #[must_use]
    pub fn with_source(config: DetectorConfig, source: Box<dyn FrameSource>) -> Self {
        Self {
            detector: GestureDetector::new(config),
            source: Some(source),
            last_frame: None,
            last_error: None,
        }
    }

    /// Captures and classifies one frame.
    ///
    /// Returns the last accepted direction, or `None` when the camera is
    /// stopped or the capture failed.
    pub fn poll_direction(&mut self, now: Instant) -> Option<Direction> {
        let source = self.source.as_mut()?;
        match source.capture() {
            Ok(frame) => {
                let detection = self.detector.detect(&frame, now);
                let rgba = image::DynamicImage::ImageRgb8(detection.frame).to_rgba8();
                let (width, height) = rgba.dimensions();
                self.last_frame = Some(Handle::from_rgba(width, height, rgba.into_raw()));
                self.last_error = None;
                detection.direction
            }
            Err(e) => {
                warn!("Skipping frame: {e}");
                self.last_error = Some(e);
                None
            }
        }
    }

    /// Releases the camera. Later polls report no direction.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            debug!("Stopping gesture capture");
            source.release();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.detector.last_direction()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&Handle> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&CameraError> {
        self.last_error.as_ref()
    }

    fn is_quit_key(key: &Key) -> bool {
        matches!(key, Key::Character(c) if c.as_str() == "q")
    }
}

impl ViewModel for GestureViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Camera(camera_message) = message {
            match camera_message {
                CameraMessage::Key(key) => {
                    if Self::is_quit_key(&key) {
                        self.stop();
                        return Some(Message::Camera(CameraMessage::Stopped));
                    }
                    None
                }
                CameraMessage::Poll(now) => {
                    if let Some(direction) = self.poll_direction(now) {
                        info!("Detected: {direction}");
                    }
                    None
                }
                CameraMessage::Stopped => None,
            }
        } else {
            error!("Non-camera message sent to GestureViewModel: {:#?}", message);
            None
        }
    }
}

impl Drop for GestureViewModel {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::VecDeque,
        rc::Rc,
        time::Duration,
    };

    use image::{Rgb, RgbImage};

    use super::*;

    #[derive(Debug)]
    struct ScriptedSource {
        frames: VecDeque<Result<RgbImage, CameraError>>,
        released: Rc<Cell<bool>>,
    }

    impl FrameSource for ScriptedSource {
        fn capture(&mut self) -> Result<RgbImage, CameraError> {
            self.frames
                .pop_front()
                .unwrap_or(Err(CameraError::Capture("script ended".to_string())))
        }

        fn release(&mut self) {
            self.released.set(true);
        }
    }

    fn marker_frame(x: u32, y: u32) -> RgbImage {
        let mut frame = RgbImage::from_pixel(320, 240, Rgb([40, 40, 40]));
        for px in x..x + 40 {
            for py in y..y + 40 {
                frame.put_pixel(px, py, Rgb([0, 200, 0]));
            }
        }
        frame
    }

    fn view_model(
        frames: Vec<Result<RgbImage, CameraError>>,
    ) -> (GestureViewModel, Rc<Cell<bool>>) {
        let released = Rc::new(Cell::new(false));
        let source = ScriptedSource {
            frames: frames.into(),
            released: Rc::clone(&released),
        };
        (
            GestureViewModel::with_source(DetectorConfig::default(), Box::new(source)),
            released,
        )
    }

    #[test]
    fn test_poll_reports_detected_direction() {
        let (mut vm, _) = view_model(vec![Ok(marker_frame(260, 100))]);
        assert_eq!(vm.poll_direction(Instant::now()), Some(Direction::Left));
        assert!(vm.last_frame().is_some());
    }

    #[test]
    fn test_capture_failure_yields_none_and_keeps_state() {
        let start = Instant::now();
        let (mut vm, _) = view_model(vec![
            Ok(marker_frame(260, 100)),
            Err(CameraError::Capture("unplugged".to_string())),
            Ok(RgbImage::from_pixel(320, 240, Rgb([40, 40, 40]))),
        ]);
        assert_eq!(vm.poll_direction(start), Some(Direction::Left));
        assert_eq!(vm.poll_direction(start + Duration::from_secs(1)), None);
        assert!(vm.last_error().is_some());
        assert_eq!(
            vm.poll_direction(start + Duration::from_secs(2)),
            Some(Direction::Left)
        );
        assert!(vm.last_error().is_none());
    }

    #[test]
    fn test_quit_key_releases_camera() {
        let (mut vm, released) = view_model(vec![Ok(marker_frame(260, 100))]);
        let reply = vm.update(Message::Camera(CameraMessage::Key(Key::Character(
            "q".into(),
        ))));
        assert!(matches!(reply, Some(Message::Camera(CameraMessage::Stopped))));
        assert!(released.get());
        assert!(!vm.is_active());
        assert_eq!(vm.poll_direction(Instant::now()), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut vm, released) = view_model(vec![]);
        let reply = vm.update(Message::Camera(CameraMessage::Key(Key::Character(
            "x".into(),
        ))));
        assert!(reply.is_none());
        assert!(!released.get());
        assert!(vm.is_active());
    }

    #[test]
    fn test_drop_releases_camera() {
        let (vm, released) = view_model(vec![]);
        drop(vm);
        assert!(released.get());
    }
}
