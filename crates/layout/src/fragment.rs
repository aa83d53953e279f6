//! Fragments: the finished output of pagination.
//!
//! A fragment is a retained list of drawing operations plus nested
//! child fragments, all positioned relative to the fragment's own
//! origin. It owns clones of the pooled resource handles it draws
//! with, so a fragment stays paintable for as long as its device
//! lives and fails fast once the device is disposed.

use crate::cursor::EPSILON;
use galley_render::{ColorHandle, FontHandle, GraphicsContext, RenderError};
use galley_types::{ImageData, Rect, Size};

/// A single retained drawing command, relative to the fragment origin.
#[derive(Debug, Clone)]
pub enum PaintOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontHandle,
        color: Option<ColorHandle>,
    },
    FillRect {
        rect: Rect,
        color: ColorHandle,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: ColorHandle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        line_width: f32,
        color: ColorHandle,
    },
    Image {
        rect: Rect,
        image: ImageData,
    },
}

/// A child fragment at an offset inside its parent.
#[derive(Debug, Clone)]
pub struct Placed {
    pub dx: f32,
    pub dy: f32,
    pub fragment: Fragment,
}

#[derive(Debug, Clone, Default)]
pub struct Fragment {
    size: Size,
    ops: Vec<PaintOp>,
    children: Vec<Placed>,
}

impl Fragment {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Size::zero())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// True for fragments produced against an unbounded box, the cue
    /// for viewers to switch to a fitted page height.
    pub fn is_unbounded(&self) -> bool {
        self.size.has_unbounded_height()
    }

    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub fn place(&mut self, dx: f32, dy: f32, fragment: Fragment) {
        self.children.push(Placed { dx, dy, fragment });
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn children(&self) -> &[Placed] {
        &self.children
    }

    /// Total retained operations including nested fragments.
    pub fn op_count(&self) -> usize {
        self.ops.len()
            + self
                .children
                .iter()
                .map(|p| p.fragment.op_count())
                .sum::<usize>()
    }

    /// Replays the fragment onto a surface with its origin at
    /// `(x, y)`. Bounded fragments clip to their own box so content
    /// never bleeds past the page area it was paginated for.
    pub fn paint(&self, gc: &mut dyn GraphicsContext, x: f32, y: f32) -> Result<(), RenderError> {
        let clipped = !self.is_unbounded();
        if clipped {
            gc.push_clip(Rect::new(
                x,
                y,
                self.size.width + EPSILON,
                self.size.height + EPSILON,
            ));
        }
        let result = self.paint_inner(gc, x, y);
        if clipped {
            gc.pop_clip();
        }
        result
    }

    fn paint_inner(
        &self,
        gc: &mut dyn GraphicsContext,
        x: f32,
        y: f32,
    ) -> Result<(), RenderError> {
        for op in &self.ops {
            match op {
                PaintOp::Text {
                    x: tx,
                    y: ty,
                    text,
                    font,
                    color,
                } => gc.draw_text(x + tx, y + ty, text, font, color.as_ref())?,
                PaintOp::FillRect { rect, color } => {
                    gc.fill_rect(rect.translate(x, y), color)?;
                }
                PaintOp::StrokeRect {
                    rect,
                    line_width,
                    color,
                } => gc.stroke_rect(rect.translate(x, y), *line_width, color)?,
                PaintOp::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    line_width,
                    color,
                } => gc.draw_line(x + x1, y + y1, x + x2, y + y2, *line_width, color)?,
                PaintOp::Image { rect, image } => {
                    gc.draw_image(rect.translate(x, y), image)?;
                }
            }
        }
        for placed in &self.children {
            placed
                .fragment
                .paint_inner(gc, x + placed.dx, y + placed.dy)?;
        }
        Ok(())
    }

    /// Walks every retained operation depth-first, handing the
    /// visitor the operation and its absolute offset.
    pub fn visit_ops(&self, visitor: &mut impl FnMut(f32, f32, &PaintOp)) {
        self.visit_inner(0.0, 0.0, visitor);
    }

    fn visit_inner(&self, x: f32, y: f32, visitor: &mut impl FnMut(f32, f32, &PaintOp)) {
        for op in &self.ops {
            visitor(x, y, op);
        }
        for placed in &self.children {
            placed
                .fragment
                .visit_inner(x + placed.dx, y + placed.dy, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_render::{CanvasOp, Device, MemoryTarget, RecordingCanvas};
    use galley_types::{BLACK, Size};

    #[test]
    fn paint_offsets_nested_children() {
        let device = Device::new(MemoryTarget::new());
        let ink = device.resources().color(&BLACK).unwrap();

        let mut inner = Fragment::new(Size::new(10.0, 10.0));
        inner.push(PaintOp::FillRect {
            rect: Rect::new(1.0, 1.0, 2.0, 2.0),
            color: ink.clone(),
        });

        let mut outer = Fragment::new(Size::new(30.0, 30.0));
        outer.place(5.0, 7.0, inner);

        let mut canvas = RecordingCanvas::new();
        outer.paint(&mut canvas, 100.0, 200.0).unwrap();

        let fill = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                CanvasOp::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!((fill.x, fill.y), (106.0, 208.0));
    }

    #[test]
    fn bounded_fragments_clip_unbounded_do_not() {
        let device = Device::new(MemoryTarget::new());
        let _ = device;

        let bounded = Fragment::new(Size::new(10.0, 10.0));
        let mut canvas = RecordingCanvas::new();
        bounded.paint(&mut canvas, 0.0, 0.0).unwrap();
        assert!(matches!(canvas.ops()[0], CanvasOp::ClipPush { .. }));
        assert!(matches!(canvas.ops().last(), Some(CanvasOp::ClipPop)));

        let unbounded = Fragment::new(Size::new(10.0, f32::INFINITY));
        let mut canvas = RecordingCanvas::new();
        unbounded.paint(&mut canvas, 0.0, 0.0).unwrap();
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn op_count_is_recursive() {
        let device = Device::new(MemoryTarget::new());
        let ink = device.resources().color(&BLACK).unwrap();

        let mut leaf = Fragment::new(Size::new(1.0, 1.0));
        leaf.push(PaintOp::FillRect {
            rect: Rect::from_size(leaf.size()),
            color: ink.clone(),
        });
        let mut root = Fragment::new(Size::new(2.0, 2.0));
        root.push(PaintOp::FillRect {
            rect: Rect::from_size(root.size()),
            color: ink,
        });
        root.place(0.0, 0.0, leaf);
        assert_eq!(root.op_count(), 2);
    }
}
