//! The closed set of content node kinds and their cursors.

pub mod background;
pub mod border;
pub mod breaks;
pub mod columns;
pub mod grid;
pub mod image;
pub mod text;
