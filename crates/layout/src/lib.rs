//! Lazy pagination of immutable content trees.
//!
//! Content describes what to print; a [`Paginator`] walks it one page
//! box at a time, emitting self-contained [`Fragment`]s that can be
//! painted onto any [`galley_render::GraphicsContext`]. Cursors keep
//! their own progress, so one content value can drive any number of
//! concurrent paginations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid argument for {0}: {1}")]
    InvalidArgument(&'static str, String),
    #[error("content minimum width {min:.2}pt exceeds the available width {available:.2}pt")]
    TooWide { min: f32, available: f32 },
    #[error("content does not fit a single page within the {0:.0}pt search ceiling")]
    FitCeiling(f32),
    #[error(transparent)]
    Render(#[from] galley_render::RenderError),
}

pub mod content;
pub mod cursor;
pub mod decor;
pub mod env;
pub mod fit;
pub mod fragment;
pub mod nodes;

pub use self::content::Content;
pub use self::cursor::{Paginator, UNBOUNDED};
pub use self::decor::{BackgroundDecorator, BorderDecorator, Decorator, DecoratorChain};
pub use self::env::LayoutEnv;
pub use self::fit::{PageFit, fit_page_height};
pub use self::fragment::{Fragment, PaintOp, Placed};
pub use self::nodes::background::BackgroundBox;
pub use self::nodes::border::{BorderBox, BorderStyle};
pub use self::nodes::columns::Columns;
pub use self::nodes::grid::{Grid, Track};
pub use self::nodes::image::ImageBlock;
pub use self::nodes::text::{TextAlign, TextBlock, TextStyle};

#[cfg(test)]
mod test_utils;
