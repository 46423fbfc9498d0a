//! Frame capture from the webcam.

use std::fmt;

use image::RgbImage;
use log::{debug, warn};

type Result<T> = std::result::Result<T, CameraError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// Built with `--no-default-features`, so there is no capture backend.
    Unsupported,
    Open(String),
    Capture(String),
    Decode,
    Released,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Unsupported => write!(f, "camera support was not compiled in"),
            CameraError::Open(e) => write!(f, "could not open camera: {e}"),
            CameraError::Capture(e) => write!(f, "could not read frame: {e}"),
            CameraError::Decode => write!(f, "frame had an unexpected size"),
            CameraError::Released => write!(f, "camera was already released"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Anything that hands out RGB frames one at a time.
pub trait FrameSource: fmt::Debug {
    /// Blocks until the next frame is available.
    ///
    /// # Errors
    ///
    /// Returns a [`CameraError`] if no frame could be read.
    fn capture(&mut self) -> Result<RgbImage>;

    /// Stops the stream. Later captures fail with [`CameraError::Released`].
    fn release(&mut self);
}

#[cfg(feature = "webcam")]
mod backend {
    use image::RgbImage;
    use nokhwa::{
        pixel_format::RgbFormat,
        utils::{CameraIndex, RequestedFormat, RequestedFormatType},
        Camera,
    };

    use super::{CameraError, Result};

    pub struct Device(Camera);

    impl Device {
        pub fn open(index: u32) -> Result<Self> {
            let format =
                RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
            let mut camera = Camera::new(CameraIndex::Index(index), format)
                .map_err(|e| CameraError::Open(e.to_string()))?;
            camera
                .open_stream()
                .map_err(|e| CameraError::Open(e.to_string()))?;
            Ok(Self(camera))
        }

        pub fn frame(&mut self) -> Result<RgbImage> {
            let buffer = self
                .0
                .frame()
                .map_err(|e| CameraError::Capture(e.to_string()))?;
            let decoded = buffer
                .decode_image::<RgbFormat>()
                .map_err(|e| CameraError::Capture(e.to_string()))?;
            let (width, height) = (decoded.width(), decoded.height());
            RgbImage::from_raw(width, height, decoded.into_raw()).ok_or(CameraError::Decode)
        }

        pub fn stop(&mut self) -> Result<()> {
            self.0
                .stop_stream()
                .map_err(|e| CameraError::Capture(e.to_string()))
        }
    }
}

#[cfg(not(feature = "webcam"))]
mod backend {
    use image::RgbImage;

    use super::{CameraError, Result};

    pub struct Device;

    impl Device {
        pub fn open(_index: u32) -> Result<Self> {
            Err(CameraError::Unsupported)
        }

        pub fn frame(&mut self) -> Result<RgbImage> {
            Err(CameraError::Unsupported)
        }

        pub fn stop(&mut self) -> Result<()> {
            Ok(())
        }
    }
}

/// The capture device at a fixed index.
pub struct Camera {
    index: u32,
    device: Option<backend::Device>,
}

impl Camera {
    /// Opens the device and starts streaming.
    ///
    /// # Errors
    ///
    /// [`CameraError::Unsupported`] without the `webcam` feature, otherwise
    /// [`CameraError::Open`] when the device cannot be started.
    pub fn open(index: u32) -> Result<Self> {
        let device = backend::Device::open(index)?;
        debug!("Opened camera {index}");
        Ok(Self {
            index,
            device: Some(device),
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("index", &self.index)
            .field("open", &self.is_open())
            .finish()
    }
}

impl FrameSource for Camera {
    fn capture(&mut self) -> Result<RgbImage> {
        match self.device.as_mut() {
            Some(device) => device.frame(),
            None => Err(CameraError::Released),
        }
    }

    fn release(&mut self) {
        if let Some(mut device) = self.device.take() {
            debug!("Releasing camera {}", self.index);
            if let Err(e) = device.stop() {
                warn!("Problem stopping camera {}: {e}", self.index);
            }
        }
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        self.release();
    }
}
