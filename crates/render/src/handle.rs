//! Pooled resource handles.
//!
//! A handle pairs the value-level description of a resource with the
//! identity the rendering target assigned to it. Handles are cheap to
//! clone; every clone refers to the same underlying allocation, and
//! releasing that allocation flips every clone to the released state
//! at once.

use galley_types::{Color, FontSpec};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
struct Slot<D> {
    description: D,
    id: u64,
    released: AtomicBool,
}

impl<D> Slot<D> {
    fn new(description: D, id: u64) -> Self {
        Self {
            description,
            id,
            released: AtomicBool::new(false),
        }
    }
}

#[derive(Clone)]
pub struct FontHandle {
    slot: Arc<Slot<FontSpec>>,
}

impl FontHandle {
    /// Constructed by rendering targets when they satisfy an
    /// allocation request.
    pub fn new(spec: FontSpec, id: u64) -> Self {
        Self {
            slot: Arc::new(Slot::new(spec, id)),
        }
    }

    pub fn spec(&self) -> &FontSpec {
        &self.slot.description
    }

    pub fn id(&self) -> u64 {
        self.slot.id
    }

    pub fn is_released(&self) -> bool {
        self.slot.released.load(Ordering::Acquire)
    }

    /// Marks the allocation released. Returns true only for the call
    /// that performed the transition, so a release can be forwarded to
    /// the backend exactly once no matter how many clones exist.
    pub(crate) fn release(&self) -> bool {
        !self.slot.released.swap(true, Ordering::AcqRel)
    }

    pub fn same_allocation(&self, other: &FontHandle) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("family", &self.spec().family)
            .field("size_pt", &self.spec().size_pt)
            .field("id", &self.id())
            .field("released", &self.is_released())
            .finish()
    }
}

#[derive(Clone)]
pub struct ColorHandle {
    slot: Arc<Slot<Color>>,
}

impl ColorHandle {
    pub fn new(color: Color, id: u64) -> Self {
        Self {
            slot: Arc::new(Slot::new(color, id)),
        }
    }

    pub fn color(&self) -> &Color {
        &self.slot.description
    }

    pub fn id(&self) -> u64 {
        self.slot.id
    }

    pub fn is_released(&self) -> bool {
        self.slot.released.load(Ordering::Acquire)
    }

    pub(crate) fn release(&self) -> bool {
        !self.slot.released.swap(true, Ordering::AcqRel)
    }

    pub fn same_allocation(&self, other: &ColorHandle) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for ColorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorHandle")
            .field("color", self.color())
            .field("id", &self.id())
            .field("released", &self.is_released())
            .finish()
    }
}
