//! Shared value types: geometry, colors, font and page descriptions.
//!
//! Everything in this crate is plain data. Resource allocation and
//! pagination live in the crates above it.

pub mod color;
pub mod font;
pub mod geometry;
pub mod image;
pub mod page;

pub use color::{BLACK, Color, WHITE};
pub use font::{FontSpec, FontStyle, FontWeight};
pub use geometry::{Rect, Size};
pub use image::ImageData;
pub use page::{Margins, PageSetup, PageSize};
