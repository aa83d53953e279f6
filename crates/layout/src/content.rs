//! The content tree.
//!
//! Content is an immutable description of what to print. Pagination
//! never mutates it; all progress lives in the cursors produced by
//! [`Content::paginate`], so one tree can serve any number of
//! paginations, previews and fit searches at once, including from
//! other threads.

use crate::LayoutError;
use crate::cursor::Paginator;
use crate::env::LayoutEnv;
use crate::nodes::background::{BackgroundBox, BackgroundCursor};
use crate::nodes::border::{BorderBox, BorderCursor};
use crate::nodes::breaks::BreakCursor;
use crate::nodes::columns::{Columns, ColumnsCursor};
use crate::nodes::grid::{Grid, GridCursor};
use crate::nodes::image::{ImageBlock, ImageCursor};
use crate::nodes::text::{TextBlock, TextCursor, TextStyle};
use galley_types::{ImageData, Size};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Content {
    Text(Arc<TextBlock>),
    Image(Arc<ImageBlock>),
    Border(Arc<BorderBox>),
    Background(Arc<BackgroundBox>),
    Grid(Arc<Grid>),
    Columns(Arc<Columns>),
    /// Hard break: ends the current box inside grids and other flows.
    Break,
}

impl Content {
    /// Opens a cursor over this content. Resource descriptions are
    /// resolved through the environment's pool here, so a disposed
    /// device or an unsatisfiable description fails on this call, not
    /// midway through a page.
    pub fn paginate(&self, env: &LayoutEnv) -> Result<Box<dyn Paginator>, LayoutError> {
        Ok(match self {
            Content::Text(block) => Box::new(TextCursor::new(env, Arc::clone(block))?),
            Content::Image(block) => Box::new(ImageCursor::new(Arc::clone(block))?),
            Content::Border(node) => Box::new(BorderCursor::new(env, node)?),
            Content::Background(node) => Box::new(BackgroundCursor::new(env, node)?),
            Content::Grid(grid) => Box::new(GridCursor::new(env, Arc::clone(grid))?),
            Content::Columns(node) => Box::new(ColumnsCursor::new(env, node)?),
            Content::Break => Box::new(BreakCursor::new()),
        })
    }

    /// Plain text in the default style.
    pub fn text(text: impl Into<String>) -> Content {
        Content::from(TextBlock::new(text))
    }

    pub fn styled_text(text: impl Into<String>, style: TextStyle) -> Content {
        Content::from(TextBlock::new(text).with_style(style))
    }

    pub fn image(image: ImageData) -> Content {
        Content::from(ImageBlock::new(image))
    }

    pub fn page_break() -> Content {
        Content::Break
    }

    /// Convenience measurement through a throwaway cursor.
    pub fn min_size(&self, env: &LayoutEnv) -> Result<Size, LayoutError> {
        Ok(self.paginate(env)?.min_size())
    }

    pub fn preferred_size(&self, env: &LayoutEnv) -> Result<Size, LayoutError> {
        Ok(self.paginate(env)?.preferred_size())
    }
}

impl From<TextBlock> for Content {
    fn from(block: TextBlock) -> Self {
        Content::Text(Arc::new(block))
    }
}

impl From<ImageBlock> for Content {
    fn from(block: ImageBlock) -> Self {
        Content::Image(Arc::new(block))
    }
}

impl From<BorderBox> for Content {
    fn from(node: BorderBox) -> Self {
        Content::Border(Arc::new(node))
    }
}

impl From<BackgroundBox> for Content {
    fn from(node: BackgroundBox) -> Self {
        Content::Background(Arc::new(node))
    }
}

impl From<Grid> for Content {
    fn from(grid: Grid) -> Self {
        Content::Grid(Arc::new(grid))
    }
}

impl From<Columns> for Content {
    fn from(node: Columns) -> Self {
        Content::Columns(Arc::new(node))
    }
}
