use crate::geometry::Size;
use std::fmt;
use std::sync::Arc;

/// Decoded raster image. Pixel data is reference counted so that
/// cloning content trees and pagination state stays cheap.
#[derive(Clone, PartialEq)]
pub struct ImageData {
    width_px: u32,
    height_px: u32,
    data: Arc<Vec<u8>>,
}

impl ImageData {
    pub fn new(width_px: u32, height_px: u32, data: Vec<u8>) -> Self {
        Self {
            width_px,
            height_px,
            data: Arc::new(data),
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Display size at the conventional one point per pixel.
    pub fn natural_size(&self) -> Size {
        Size::new(self.width_px as f32, self.height_px as f32)
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .field("data_len", &self.data.len())
            .finish()
    }
}
