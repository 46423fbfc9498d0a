//! Webcam color-blob gesture detection.

pub mod blob;
pub mod camera;
pub mod debounce;
pub mod detector;
pub mod hsv;
pub mod overlay;
pub mod zone;
