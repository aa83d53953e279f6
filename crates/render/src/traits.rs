//! Capability traits implemented by rendering backends.
//!
//! A backend supplies three things: resource allocation
//! ([`RenderTarget`]), text measurement ([`TextMetrics`]) and drawing
//! ([`GraphicsContext`]). Pagination only ever measures; drawing
//! happens later, when a finished fragment is painted.

use crate::error::RenderError;
use crate::handle::{ColorHandle, FontHandle};
use galley_types::{Color, FontSpec, ImageData, Rect};
use std::fmt::Debug;

/// Vertical metrics for one font, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub leading: f32,
}

impl LineMetrics {
    /// Full advance from one line top to the next.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Allocates device-level resources. Implementations are free to map
/// descriptions onto anything from PDF font dictionaries to GPU
/// texture ids; the pool above them guarantees each distinct
/// description is requested at most once per device.
pub trait RenderTarget: Send + Sync + Debug {
    fn alloc_font(&self, spec: &FontSpec) -> Result<FontHandle, RenderError>;

    fn alloc_color(&self, color: &Color) -> Result<ColorHandle, RenderError>;

    /// Called once when the owning device is disposed, after all
    /// pooled handles have been released.
    fn shutdown(&self) {}

    fn name(&self) -> &'static str;
}

/// Text measurement for pagination. Kept separate from drawing so
/// cursors can measure while no drawing surface is live.
pub trait TextMetrics: Send + Sync {
    /// Advance width of `text` rendered in `font`, in points.
    fn text_width(&self, font: &FontHandle, text: &str) -> f32;

    fn line_metrics(&self, font: &FontHandle) -> LineMetrics;
}

/// Drawing surface a fragment paints onto. Coordinates are in points
/// with the origin at the top left and y growing downward. For text,
/// `y` is the top of the line box; backends place the baseline using
/// their own metrics.
pub trait GraphicsContext {
    fn fill_rect(&mut self, rect: Rect, color: &ColorHandle) -> Result<(), RenderError>;

    fn stroke_rect(
        &mut self,
        rect: Rect,
        line_width: f32,
        color: &ColorHandle,
    ) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        line_width: f32,
        color: &ColorHandle,
    ) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: &FontHandle,
        color: Option<&ColorHandle>,
    ) -> Result<(), RenderError>;

    fn draw_image(&mut self, rect: Rect, image: &ImageData) -> Result<(), RenderError>;

    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}
