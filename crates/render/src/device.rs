//! A device wraps one rendering target for its whole lifetime and
//! owns the resource pool scoped to it.

use crate::pool::ResourcePool;
use crate::traits::RenderTarget;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

pub(crate) struct DeviceInner {
    target: Box<dyn RenderTarget>,
    disposed: AtomicBool,
    pool: OnceLock<ResourcePool>,
}

impl DeviceInner {
    pub(crate) fn target(&self) -> &dyn RenderTarget {
        self.target.as_ref()
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

/// Handle to one rendering target. Clones share the target, its
/// disposal flag and its pool.
#[derive(Clone)]
pub struct Device {
    inner: Arc<DeviceInner>,
}

impl Device {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            inner: Arc::new(DeviceInner {
                target: Box::new(target),
                disposed: AtomicBool::new(false),
                pool: OnceLock::new(),
            }),
        }
    }

    /// The pool caching resources for this device. Created on first
    /// use; every later call returns the same pool, so equal resource
    /// descriptions resolve to the same allocation for as long as the
    /// device lives.
    pub fn resources(&self) -> &ResourcePool {
        self.inner
            .pool
            .get_or_init(|| ResourcePool::new(Arc::downgrade(&self.inner)))
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    /// Releases every pooled resource exactly once and shuts the
    /// target down. Idempotent; later calls do nothing.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        // The flag is already up, so any pool lookup that still gets
        // past its liveness check has inserted before this flush and
        // is released by it.
        if let Some(pool) = self.inner.pool.get() {
            pool.release_all();
        }
        self.inner.target.shutdown();
        log::debug!("device '{}' disposed", self.inner.target.name());
    }

    pub fn target_name(&self) -> &'static str {
        self.inner.target.name()
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("target", &self.inner.target.name())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
