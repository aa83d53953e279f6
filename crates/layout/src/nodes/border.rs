//! Border boxes.
//!
//! A border wraps its child with side lines, padding and, on the
//! edges where the content actually starts and ends, top and bottom
//! lines. When the child splits across boxes the intermediate edges
//! stay open: the first piece closes the top, the last piece closes
//! the bottom, and the side lines run through every piece.

use crate::LayoutError;
use crate::content::Content;
use crate::cursor::{Paginator, fits};
use crate::env::LayoutEnv;
use crate::fragment::{Fragment, PaintOp};
use galley_render::ColorHandle;
use galley_types::{BLACK, Color, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    pub line_width: f32,
    pub color: Color,
    /// Gap between the lines and the content, applied on every side.
    pub padding: f32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: BLACK,
            padding: 2.0,
        }
    }
}

impl BorderStyle {
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(LayoutError::InvalidArgument(
                "border line width",
                format!("{}", self.line_width),
            ));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(LayoutError::InvalidArgument(
                "border padding",
                format!("{}", self.padding),
            ));
        }
        if !self.color.has_valid_alpha() {
            return Err(LayoutError::InvalidArgument(
                "border color",
                format!("opacity {}", self.color.a),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BorderBox {
    child: Content,
    style: BorderStyle,
}

impl BorderBox {
    pub fn new(child: Content, style: BorderStyle) -> Result<Self, LayoutError> {
        style.validate()?;
        Ok(Self { child, style })
    }

    pub(crate) fn from_parts(child: Content, style: BorderStyle) -> Self {
        Self { child, style }
    }

    pub fn child(&self) -> &Content {
        &self.child
    }

    pub fn style(&self) -> &BorderStyle {
        &self.style
    }
}

#[derive(Debug)]
pub(crate) struct BorderCursor {
    child: Box<dyn Paginator>,
    style: BorderStyle,
    ink: ColorHandle,
    first: bool,
}

impl BorderCursor {
    pub(crate) fn new(env: &LayoutEnv, node: &BorderBox) -> Result<Self, LayoutError> {
        Ok(Self {
            child: node.child.paginate(env)?,
            style: node.style.clone(),
            ink: env.pool().color(&node.style.color)?,
            first: true,
        })
    }

    /// Inset on an edge where the line is drawn.
    fn closed(&self) -> f32 {
        self.style.line_width + self.style.padding
    }

    /// Inset on an edge left open for continuation.
    fn open(&self) -> f32 {
        self.style.padding
    }
}

impl Paginator for BorderCursor {
    fn min_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let top = if self.first { self.closed() } else { self.open() };
        // The bottom of a minimal piece may stay open.
        let child = self.child.min_size();
        Size::new(
            child.width + 2.0 * self.closed(),
            child.height + top + self.open(),
        )
    }

    fn preferred_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let top = if self.first { self.closed() } else { self.open() };
        let child = self.child.preferred_size();
        Size::new(
            child.width + 2.0 * self.closed(),
            child.height + top + self.closed(),
        )
    }

    fn has_more(&self) -> bool {
        self.child.has_more()
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        let top_closed = self.first;
        let top = if top_closed { self.closed() } else { self.open() };
        let inner_w = width - 2.0 * self.closed();

        // First try reserving room for a closing bottom line. If the
        // child finishes in that space the border closes cleanly.
        let mut trial = self.child.fork();
        let attempt = trial.next(inner_w, height - top - self.closed())?;
        let (piece, closed_bottom, committed) = match attempt {
            Some(piece) if !trial.has_more() => (piece, true, trial),
            attempt => {
                // Child continues past this box. Give back the
                // reserved line and leave the bottom edge open.
                let mut retry = self.child.fork();
                let Some(piece) = retry.next(inner_w, height - top - self.open())? else {
                    return Ok(None);
                };
                if !retry.has_more() {
                    if fits(top + piece.height() + self.closed(), height) {
                        // The extra room was just enough to finish and
                        // the closing line still fits.
                        (piece, true, retry)
                    } else if let Some(short) = attempt {
                        // The extra room let the child finish but left
                        // no space for the closing line. Keep the
                        // shorter reserved-line piece instead; the
                        // remainder moves to the next box, which then
                        // closes the bottom.
                        (short, false, trial)
                    } else {
                        // Not even one child line fits once the
                        // closing line is reserved: the box cannot
                        // take a final piece whole.
                        return Ok(None);
                    }
                } else {
                    (piece, false, retry)
                }
            }
        };
        self.child = committed;
        self.first = false;

        let lw = self.style.line_width;
        let bottom = if closed_bottom { self.closed() } else { self.open() };
        let frag_w = piece.width() + 2.0 * self.closed();
        let frag_h = top + piece.height() + bottom;

        let mut fragment = Fragment::new(Size::new(frag_w, frag_h));
        fragment.push(PaintOp::FillRect {
            rect: Rect::new(0.0, 0.0, lw, frag_h),
            color: self.ink.clone(),
        });
        fragment.push(PaintOp::FillRect {
            rect: Rect::new(frag_w - lw, 0.0, lw, frag_h),
            color: self.ink.clone(),
        });
        if top_closed {
            fragment.push(PaintOp::FillRect {
                rect: Rect::new(0.0, 0.0, frag_w, lw),
                color: self.ink.clone(),
            });
        }
        if closed_bottom {
            fragment.push(PaintOp::FillRect {
                rect: Rect::new(0.0, frag_h - lw, frag_w, lw),
                color: self.ink.clone(),
            });
        }
        fragment.place(self.closed(), top, piece);
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(Self {
            child: self.child.fork(),
            style: self.style.clone(),
            ink: self.ink.clone(),
            first: self.first,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::text::TextBlock;
    use crate::test_utils::test_env;
    use galley_types::FontSpec;

    fn bordered(text: &str) -> BorderCursor {
        let env = test_env();
        let node = BorderBox::new(
            Content::from(TextBlock::new(text).with_font(FontSpec::new("Mono", 10.0))),
            BorderStyle {
                line_width: 1.0,
                color: BLACK,
                padding: 2.0,
            },
        )
        .unwrap();
        BorderCursor::new(&env, &node).unwrap()
    }

    fn edge_count(frag: &Fragment) -> usize {
        frag.ops()
            .iter()
            .filter(|op| matches!(op, PaintOp::FillRect { .. }))
            .count()
    }

    #[test]
    fn single_piece_closes_all_edges() {
        let mut c = bordered("hi");
        // Text is 12x12; closed insets add 3 per side.
        assert_eq!(c.min_size(), Size::new(18.0, 17.0));

        let frag = c.next(100.0, 100.0).unwrap().unwrap();
        assert_eq!(frag.size(), Size::new(18.0, 18.0));
        assert_eq!(edge_count(&frag), 4);
        assert!(!c.has_more());
    }

    #[test]
    fn split_leaves_intermediate_edges_open() {
        let mut c = bordered("aa bb cc");
        // Inner width 12 holds one word per line; height 16 holds a
        // single 12pt line plus the closed top inset and open bottom.
        let first = c.next(18.0, 17.0).unwrap().unwrap();
        assert_eq!(edge_count(&first), 3);
        assert!(c.has_more());

        // Continuation pieces open the top as well.
        let middle = c.next(18.0, 16.0).unwrap().unwrap();
        assert_eq!(edge_count(&middle), 2);
        assert_eq!(middle.height(), 16.0);

        // Final piece closes the bottom.
        let last = c.next(18.0, 17.0).unwrap().unwrap();
        assert_eq!(edge_count(&last), 3);
        assert!(!c.has_more());
    }

    #[test]
    fn bottom_edge_carries_over_when_its_line_no_longer_fits() {
        // Two 12pt lines at inner width 12. With the bottom line
        // reserved the box holds one line; without it both fit, but
        // then nothing is left to close the border. The second line
        // must carry over so the next box can close it.
        let mut c = bordered("aa bb");
        let first = c.next(18.0, 29.5).unwrap().unwrap();
        assert_eq!(first.height(), 17.0);
        assert_eq!(edge_count(&first), 3);
        assert!(c.has_more());

        let last = c.next(18.0, 29.5).unwrap().unwrap();
        assert_eq!(edge_count(&last), 3);
        let closes_bottom = last.ops().iter().any(|op| {
            matches!(
                op,
                PaintOp::FillRect { rect, .. }
                    if rect.height == 1.0 && rect.y == last.height() - 1.0
            )
        });
        assert!(closes_bottom, "final piece must draw the bottom line");
        assert!(!c.has_more());
    }

    #[test]
    fn final_piece_waits_for_room_to_close() {
        // 17.5pt fits the single line only with an open bottom, but a
        // lone final line has to close. No progress until the closing
        // line fits as well.
        let mut c = bordered("hi");
        assert!(c.next(100.0, 17.5).unwrap().is_none());
        assert!(c.has_more());

        let frag = c.next(100.0, 18.0).unwrap().unwrap();
        assert_eq!(edge_count(&frag), 4);
        assert!(!c.has_more());
    }

    #[test]
    fn no_progress_without_room_for_one_line() {
        let mut c = bordered("word");
        assert!(c.next(100.0, 10.0).unwrap().is_none());
        assert!(c.has_more());
    }

    #[test]
    fn child_sits_inside_the_insets() {
        let mut c = bordered("x");
        let frag = c.next(100.0, 100.0).unwrap().unwrap();
        let child = &frag.children()[0];
        assert_eq!((child.dx, child.dy), (3.0, 3.0));
    }

    #[test]
    fn bad_styles_are_rejected() {
        let style = BorderStyle {
            line_width: 0.0,
            ..BorderStyle::default()
        };
        assert!(BorderBox::new(Content::text("x"), style).is_err());

        let style = BorderStyle {
            padding: f32::NAN,
            ..BorderStyle::default()
        };
        assert!(BorderBox::new(Content::text("x"), style).is_err());
    }
}
