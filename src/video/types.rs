use image::{ImageBuffer, Rgba, RgbaImage};

/// A single video frame.
///
/// A thin wrapper around an RGBA image buffer with the pixel accessors the
/// draw primitives need. The alpha channel exists so decoded logos composite
/// correctly; source video frames are fully opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    buffer: RgbaImage,
}

impl Frame {
    /// Create a new frame from an RGBA image buffer
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    /// Create a new frame with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let buffer = ImageBuffer::from_fn(width, height, |_, _| Rgba(color));
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Get a mutable reference to a pixel's channels
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8; 4] {
        &mut self.buffer.get_pixel_mut(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.buffer.put_pixel(x, y, Rgba(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.buffer
    }

    /// Save the frame as a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.buffer.save(path)
    }
}

/// Frame-stream properties queried from the source before composition.
///
/// Width, height, and frame count always come from the stream's own metadata;
/// the layout resolver and the animation timeline must never assume them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub frame_count: u64,
}
