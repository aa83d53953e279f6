//! In-memory backend: deterministic metrics, recorded drawing.
//!
//! This is the backend used by tests, benchmarks and previews. Fonts
//! and colors are allocated as plain counters, text is measured with a
//! fixed-pitch model and drawing is recorded as a list of operations
//! that assertions can inspect.

use crate::error::RenderError;
use crate::handle::{ColorHandle, FontHandle};
use crate::traits::{GraphicsContext, LineMetrics, RenderTarget, TextMetrics};
use galley_types::{Color, FontSpec, ImageData, Rect};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct MemoryTarget {
    next_id: AtomicU64,
    allocations: AtomicUsize,
    shut_down: AtomicBool,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total allocations satisfied over the target's lifetime. The
    /// pool above dedupes by description, so this counts distinct
    /// descriptions.
    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    fn next_id(&self) -> Result<u64, RenderError> {
        if self.is_shut_down() {
            return Err(RenderError::TargetDisposed);
        }
        self.allocations.fetch_add(1, Ordering::Relaxed);
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl RenderTarget for MemoryTarget {
    fn alloc_font(&self, spec: &FontSpec) -> Result<FontHandle, RenderError> {
        Ok(FontHandle::new(spec.clone(), self.next_id()?))
    }

    fn alloc_color(&self, color: &Color) -> Result<ColorHandle, RenderError> {
        Ok(ColorHandle::new(color.clone(), self.next_id()?))
    }

    fn shutdown(&self) {
        self.shut_down.store(true, Ordering::Release);
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

const ADVANCE_RATIO: f32 = 0.6;
const ASCENT_RATIO: f32 = 0.75;
const DESCENT_RATIO: f32 = 0.25;
const LEADING_RATIO: f32 = 0.2;

/// Fixed-pitch measurement: every glyph advances 0.6 of the font size,
/// a line is 1.2 of the font size tall. Deterministic by construction,
/// which is what pagination tests need.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoMetrics;

impl TextMetrics for MonoMetrics {
    fn text_width(&self, font: &FontHandle, text: &str) -> f32 {
        text.chars().count() as f32 * font.spec().size_pt * ADVANCE_RATIO
    }

    fn line_metrics(&self, font: &FontHandle) -> LineMetrics {
        let size = font.spec().size_pt;
        LineMetrics {
            ascent: size * ASCENT_RATIO,
            descent: size * DESCENT_RATIO,
            leading: size * LEADING_RATIO,
        }
    }
}

/// One recorded drawing call, in absolute surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        line_width: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontSpec,
        color: Option<Color>,
    },
    Image {
        rect: Rect,
        width_px: u32,
        height_px: u32,
    },
    ClipPush {
        rect: Rect,
    },
    ClipPop,
}

/// Graphics context that records instead of rasterizing. Drawing with
/// a released handle fails fast, mirroring what a real surface would
/// do with a dead device resource.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Every piece of text drawn, in call order.
    pub fn text_runs(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn check_color(color: &ColorHandle) -> Result<(), RenderError> {
        if color.is_released() {
            return Err(RenderError::TargetDisposed);
        }
        Ok(())
    }
}

impl GraphicsContext for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: &ColorHandle) -> Result<(), RenderError> {
        Self::check_color(color)?;
        self.ops.push(CanvasOp::FillRect {
            rect,
            color: color.color().clone(),
        });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        line_width: f32,
        color: &ColorHandle,
    ) -> Result<(), RenderError> {
        Self::check_color(color)?;
        self.ops.push(CanvasOp::StrokeRect {
            rect,
            line_width,
            color: color.color().clone(),
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        line_width: f32,
        color: &ColorHandle,
    ) -> Result<(), RenderError> {
        Self::check_color(color)?;
        self.ops.push(CanvasOp::Line {
            x1,
            y1,
            x2,
            y2,
            line_width,
            color: color.color().clone(),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: &FontHandle,
        color: Option<&ColorHandle>,
    ) -> Result<(), RenderError> {
        if font.is_released() {
            return Err(RenderError::TargetDisposed);
        }
        if let Some(color) = color {
            Self::check_color(color)?;
        }
        self.ops.push(CanvasOp::Text {
            x,
            y,
            text: text.to_string(),
            font: font.spec().clone(),
            color: color.map(|c| c.color().clone()),
        });
        Ok(())
    }

    fn draw_image(&mut self, rect: Rect, image: &ImageData) -> Result<(), RenderError> {
        self.ops.push(CanvasOp::Image {
            rect,
            width_px: image.width_px(),
            height_px: image.height_px(),
        });
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::ClipPush { rect });
    }

    fn pop_clip(&mut self) {
        self.ops.push(CanvasOp::ClipPop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;

    #[test]
    fn mono_metrics_are_fixed_pitch() {
        let font = FontHandle::new(FontSpec::new("Mono", 10.0), 0);
        let metrics = MonoMetrics;

        assert_eq!(metrics.text_width(&font, "abcd"), 4.0 * 6.0);
        assert_eq!(metrics.text_width(&font, ""), 0.0);

        let line = metrics.line_metrics(&font);
        assert_eq!(line.height(), 12.0);
        assert_eq!(line.ascent, 7.5);
    }

    #[test]
    fn drawing_with_released_handles_fails() {
        let device = Device::new(MemoryTarget::new());
        let font = device.resources().font(&FontSpec::default()).unwrap();
        let ink = device.resources().color(&galley_types::BLACK).unwrap();
        device.dispose();

        let mut canvas = RecordingCanvas::new();
        assert_eq!(
            canvas.draw_text(0.0, 0.0, "x", &font, None).unwrap_err(),
            RenderError::TargetDisposed
        );
        assert_eq!(
            canvas
                .fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &ink)
                .unwrap_err(),
            RenderError::TargetDisposed
        );
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn shutdown_stops_allocation() {
        let target = MemoryTarget::new();
        target.alloc_color(&galley_types::BLACK).unwrap();
        target.shutdown();
        assert_eq!(
            target.alloc_color(&galley_types::WHITE).unwrap_err(),
            RenderError::TargetDisposed
        );
        assert_eq!(target.allocations(), 1);
    }
}
