//! Hard break markers.
//!
//! A break renders as nothing. Its effect lives in composites: a grid
//! stops filling the current box when it reaches one, so whatever
//! follows starts in the next box. A break already at the top of a
//! fresh box is consumed silently, which keeps repeated breaks from
//! emitting runs of blank pages.

use crate::LayoutError;
use crate::cursor::Paginator;
use crate::fragment::Fragment;
use galley_types::Size;

#[derive(Debug, Clone, Default)]
pub(crate) struct BreakCursor {
    started: bool,
}

impl BreakCursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Paginator for BreakCursor {
    fn min_size(&self) -> Size {
        Size::zero()
    }

    fn preferred_size(&self) -> Size {
        Size::zero()
    }

    fn has_more(&self) -> bool {
        !self.started
    }

    fn next(&mut self, _width: f32, _height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        self.started = true;
        Ok(Some(Fragment::empty()))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(self.clone())
    }
}
