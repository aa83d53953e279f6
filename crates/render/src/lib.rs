//! Rendering targets, device-scoped resource pooling and the drawing
//! traits pagination produces against.
//!
//! The lifecycle is: create a [`Device`] around a [`RenderTarget`],
//! resolve fonts and colors through [`Device::resources`], paint
//! through a [`GraphicsContext`], and finally [`Device::dispose`] to
//! release every pooled resource in one sweep.

pub mod device;
pub mod error;
pub mod handle;
pub mod memory;
pub mod pool;
pub mod traits;

pub use device::Device;
pub use error::RenderError;
pub use handle::{ColorHandle, FontHandle};
pub use memory::{CanvasOp, MemoryTarget, MonoMetrics, RecordingCanvas};
pub use pool::ResourcePool;
pub use traits::{GraphicsContext, LineMetrics, RenderTarget, TextMetrics};
