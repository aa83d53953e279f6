//! Galley is a page composition engine. Immutable content trees are
//! paginated lazily into fragments, each fragment a self-contained,
//! paintable slice of the document sized for the box it was asked to
//! fill.
//!
//! The pipeline in one sitting:
//!
//! ```no_run
//! use galley::{Content, Device, LayoutEnv, MemoryTarget, MonoMetrics};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let device = Device::new(MemoryTarget::new());
//!     let env = LayoutEnv::new(device.clone(), Arc::new(MonoMetrics));
//!
//!     let content = Content::text("hello page");
//!     let mut pages = content.paginate(&env)?;
//!     while let Some(fragment) = pages.next(144.0, 72.0)? {
//!         println!("page of {:.0}x{:.0}", fragment.width(), fragment.height());
//!     }
//!     device.dispose();
//!     Ok(())
//! }
//! ```

pub mod preview;

pub use preview::Preview;

pub use galley_layout::{
    BackgroundBox, BackgroundDecorator, BorderBox, BorderDecorator, BorderStyle, Columns,
    Content, Decorator, DecoratorChain, Fragment, Grid, ImageBlock, LayoutEnv, LayoutError,
    PageFit, PaintOp, Paginator, Placed, TextAlign, TextBlock, TextStyle, Track, UNBOUNDED,
    fit_page_height,
};
pub use galley_render::{
    CanvasOp, ColorHandle, Device, FontHandle, GraphicsContext, LineMetrics, MemoryTarget,
    MonoMetrics, RecordingCanvas, RenderError, RenderTarget, ResourcePool, TextMetrics,
};
pub use galley_types::{
    BLACK, Color, FontSpec, FontStyle, FontWeight, ImageData, Margins, PageSetup, PageSize,
    Rect, Size, WHITE,
};
