//! Background fills.

use crate::LayoutError;
use crate::content::Content;
use crate::cursor::Paginator;
use crate::env::LayoutEnv;
use crate::fragment::{Fragment, PaintOp};
use galley_render::ColorHandle;
use galley_types::{Color, Rect, Size};
use std::sync::Arc;

/// Fills the area behind its child. The fill always matches the child
/// fragment exactly, so a split child gets a split background instead
/// of one page-sized slab.
#[derive(Debug, Clone)]
pub struct BackgroundBox {
    child: Content,
    color: Color,
}

impl BackgroundBox {
    pub fn new(child: Content, color: Color) -> Result<Self, LayoutError> {
        if !color.has_valid_alpha() {
            return Err(LayoutError::InvalidArgument(
                "background color",
                format!("opacity {}", color.a),
            ));
        }
        Ok(Self { child, color })
    }

    pub(crate) fn from_parts(child: Content, color: Color) -> Self {
        Self { child, color }
    }

    pub fn child(&self) -> &Content {
        &self.child
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

#[derive(Debug)]
pub(crate) struct BackgroundCursor {
    child: Box<dyn Paginator>,
    ink: ColorHandle,
}

impl BackgroundCursor {
    pub(crate) fn new(env: &LayoutEnv, node: &BackgroundBox) -> Result<Self, LayoutError> {
        Ok(Self {
            child: node.child.paginate(env)?,
            ink: env.pool().color(&node.color)?,
        })
    }
}

impl Paginator for BackgroundCursor {
    fn min_size(&self) -> Size {
        self.child.min_size()
    }

    fn preferred_size(&self) -> Size {
        self.child.preferred_size()
    }

    fn has_more(&self) -> bool {
        self.child.has_more()
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        let Some(piece) = self.child.next(width, height)? else {
            return Ok(None);
        };
        let size = piece.size();
        let mut fragment = Fragment::new(size);
        fragment.push(PaintOp::FillRect {
            rect: Rect::from_size(size),
            color: self.ink.clone(),
        });
        fragment.place(0.0, 0.0, piece);
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(Self {
            child: self.child.fork(),
            ink: self.ink.clone(),
        })
    }
}
