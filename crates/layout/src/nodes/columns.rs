//! Column flow.
//!
//! Splits one child across `count` side-by-side columns, filling them
//! left to right. A column box is greedy: it claims the full height it
//! was offered, which is what lets a viewer detect an unbounded layout
//! (the fragment reports infinite height) and re-run pagination with a
//! fitted page height instead.

use crate::LayoutError;
use crate::content::Content;
use crate::cursor::Paginator;
use crate::env::LayoutEnv;
use crate::fragment::Fragment;
use galley_types::Size;

#[derive(Debug, Clone)]
pub struct Columns {
    child: Content,
    count: usize,
    gap: f32,
}

impl Columns {
    pub fn new(child: Content, count: usize) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::InvalidArgument(
                "column count",
                "zero columns".into(),
            ));
        }
        Ok(Self {
            child,
            count,
            gap: 0.0,
        })
    }

    pub fn with_gap(mut self, gap: f32) -> Result<Self, LayoutError> {
        if !(gap.is_finite() && gap >= 0.0) {
            return Err(LayoutError::InvalidArgument(
                "column gap",
                format!("{}", gap),
            ));
        }
        self.gap = gap;
        Ok(self)
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[derive(Debug)]
pub(crate) struct ColumnsCursor {
    child: Box<dyn Paginator>,
    count: usize,
    gap: f32,
}

impl ColumnsCursor {
    pub(crate) fn new(env: &LayoutEnv, node: &Columns) -> Result<Self, LayoutError> {
        Ok(Self {
            child: node.child.paginate(env)?,
            count: node.count,
            gap: node.gap,
        })
    }

    fn gap_total(&self) -> f32 {
        self.gap * (self.count - 1) as f32
    }

    fn column_width(&self, width: f32) -> f32 {
        (width - self.gap_total()) / self.count as f32
    }
}

impl Paginator for ColumnsCursor {
    fn min_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let child = self.child.min_size();
        Size::new(
            child.width * self.count as f32 + self.gap_total(),
            child.height,
        )
    }

    fn preferred_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let child = self.child.preferred_size();
        // Height assumes the columns end up roughly balanced.
        Size::new(
            child.width * self.count as f32 + self.gap_total(),
            child.height / self.count as f32,
        )
    }

    fn has_more(&self) -> bool {
        self.child.has_more()
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        let col_w = self.column_width(width);
        let mut pieces: Vec<(f32, Fragment)> = Vec::new();
        for col in 0..self.count {
            let x = col as f32 * (col_w + self.gap);
            match self.child.next(col_w, height)? {
                None => {
                    if col == 0 {
                        // First column refused: the box is too small
                        // and nothing was consumed.
                        return Ok(None);
                    }
                    break;
                }
                Some(piece) => {
                    pieces.push((x, piece));
                    if !self.child.has_more() {
                        break;
                    }
                }
            }
        }

        let frag_w = if width.is_finite() {
            width
        } else {
            pieces
                .iter()
                .map(|(x, piece)| x + piece.width())
                .fold(0.0, f32::max)
        };
        let mut fragment = Fragment::new(Size::new(frag_w, height));
        for (x, piece) in pieces {
            fragment.place(x, 0.0, piece);
        }
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(Self {
            child: self.child.fork(),
            count: self.count,
            gap: self.gap,
        })
    }
}
