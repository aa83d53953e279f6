//! Atomic images.

use crate::LayoutError;
use crate::cursor::{Paginator, fits};
use crate::fragment::{Fragment, PaintOp};
use galley_types::{ImageData, Rect, Size};
use std::sync::Arc;

/// An image placed at a fixed display size. Images never split: the
/// box either holds the whole image or gets nothing.
#[derive(Debug, Clone)]
pub struct ImageBlock {
    image: ImageData,
    size: Size,
}

impl ImageBlock {
    pub fn new(image: ImageData) -> Self {
        let size = image.natural_size();
        Self { image, size }
    }

    /// Overrides the display size in points.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        let ok = self.size.width.is_finite()
            && self.size.height.is_finite()
            && self.size.width > 0.0
            && self.size.height > 0.0;
        if !ok {
            return Err(LayoutError::InvalidArgument(
                "image size",
                format!("{:.2}x{:.2}", self.size.width, self.size.height),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ImageCursor {
    block: Arc<ImageBlock>,
    started: bool,
}

impl ImageCursor {
    pub(crate) fn new(block: Arc<ImageBlock>) -> Result<Self, LayoutError> {
        block.validate()?;
        Ok(Self {
            block,
            started: false,
        })
    }
}

impl Paginator for ImageCursor {
    fn min_size(&self) -> Size {
        if self.has_more() { self.block.size } else { Size::zero() }
    }

    fn preferred_size(&self) -> Size {
        self.min_size()
    }

    fn has_more(&self) -> bool {
        !self.started
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        let size = self.block.size;
        if !fits(size.width, width) || !fits(size.height, height) {
            return Ok(None);
        }
        self.started = true;
        let mut fragment = Fragment::new(size);
        fragment.push(PaintOp::Image {
            rect: Rect::from_size(size),
            image: self.block.image.clone(),
        });
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(w: u32, h: u32) -> Arc<ImageBlock> {
        Arc::new(ImageBlock::new(ImageData::new(w, h, vec![0; 4])))
    }

    #[test]
    fn image_is_atomic() {
        let mut c = ImageCursor::new(block(40, 30)).unwrap();
        assert!(c.next(39.0, 100.0).unwrap().is_none());
        assert!(c.next(100.0, 29.0).unwrap().is_none());
        assert!(c.has_more());

        let frag = c.next(40.0, 30.0).unwrap().unwrap();
        assert_eq!(frag.size(), Size::new(40.0, 30.0));
        assert!(!c.has_more());
    }

    #[test]
    fn zero_sized_display_is_rejected() {
        let bad = ImageBlock::new(ImageData::new(10, 10, vec![])).with_size(Size::zero());
        assert!(matches!(
            ImageCursor::new(Arc::new(bad)),
            Err(LayoutError::InvalidArgument(..))
        ));
    }
}
