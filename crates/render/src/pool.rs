//! Per-device resource pool.
//!
//! Rendering targets hand out one allocation per distinct resource
//! description. The pool enforces that: the first request for a
//! description allocates through the target, every later request for
//! an equal description returns a clone of the cached handle. Keys are
//! copied on insertion, so a caller mutating its own description after
//! the call can never corrupt the cache.
//!
//! The pool holds its device weakly. Once the device is disposed (or
//! dropped) every lookup fails with [`RenderError::TargetDisposed`] at
//! the call site rather than surfacing later inside a drawing pass.

use crate::device::DeviceInner;
use crate::error::RenderError;
use crate::handle::{ColorHandle, FontHandle};
use galley_types::{Color, FontSpec};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

#[derive(Default)]
struct PoolCache {
    fonts: HashMap<FontSpec, FontHandle>,
    colors: HashMap<Color, ColorHandle>,
}

pub struct ResourcePool {
    device: Weak<DeviceInner>,
    cache: Mutex<PoolCache>,
}

impl ResourcePool {
    pub(crate) fn new(device: Weak<DeviceInner>) -> Self {
        Self {
            device,
            cache: Mutex::new(PoolCache::default()),
        }
    }

    /// Resolves a font description to a handle, allocating on first
    /// use. Fails fast with [`RenderError::InvalidDescription`] for
    /// descriptions no target could satisfy and with
    /// [`RenderError::TargetDisposed`] once the device is gone.
    pub fn font(&self, spec: &FontSpec) -> Result<FontHandle, RenderError> {
        // Lookup, miss allocation and insertion happen under one lock
        // so concurrent requests for the same description cannot race
        // into two allocations. The liveness check sits under it too:
        // disposal flips the flag before flushing the cache through
        // this same lock, so a lookup that passes the check always
        // inserts before the flush and its handle gets released with
        // the rest.
        let mut cache = self.lock_cache();
        let device = self.live_device()?;
        if !spec.is_well_formed() {
            return Err(RenderError::InvalidDescription {
                kind: "font",
                message: format!(
                    "family '{}' at {}pt is not allocatable",
                    spec.family, spec.size_pt
                ),
            });
        }

        if let Some(handle) = cache.fonts.get(spec) {
            log::trace!("font cache hit: {} {}pt", spec.family, spec.size_pt);
            return Ok(handle.clone());
        }
        let handle = device.target().alloc_font(spec)?;
        cache.fonts.insert(spec.clone(), handle.clone());
        log::debug!(
            "allocated font {} {}pt ({:?}/{:?}) as #{}",
            spec.family,
            spec.size_pt,
            spec.weight,
            spec.style,
            handle.id()
        );
        Ok(handle)
    }

    /// Like [`ResourcePool::font`] but passes an absent description
    /// straight through without touching the cache.
    pub fn font_for(&self, spec: Option<&FontSpec>) -> Result<Option<FontHandle>, RenderError> {
        match spec {
            None => Ok(None),
            Some(spec) => self.font(spec).map(Some),
        }
    }

    pub fn color(&self, color: &Color) -> Result<ColorHandle, RenderError> {
        // Same locking discipline as `font`.
        let mut cache = self.lock_cache();
        let device = self.live_device()?;
        if !color.has_valid_alpha() {
            return Err(RenderError::InvalidDescription {
                kind: "color",
                message: format!("opacity {} is outside 0..=1", color.a),
            });
        }

        if let Some(handle) = cache.colors.get(color) {
            return Ok(handle.clone());
        }
        let handle = device.target().alloc_color(color)?;
        cache.colors.insert(color.clone(), handle.clone());
        log::debug!("allocated color {:?} as #{}", color, handle.id());
        Ok(handle)
    }

    /// Absent-sentinel passthrough for colors, the common case being
    /// text drawn in the target's default ink.
    pub fn color_for(&self, color: Option<&Color>) -> Result<Option<ColorHandle>, RenderError> {
        match color {
            None => Ok(None),
            Some(color) => self.color(color).map(Some),
        }
    }

    /// Number of distinct resources currently cached.
    pub fn len(&self) -> usize {
        let cache = self.lock_cache();
        cache.fonts.len() + cache.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every cached handle exactly once and empties the
    /// cache. Called by the device on disposal.
    pub(crate) fn release_all(&self) {
        let mut cache = self.lock_cache();
        let mut released = 0usize;
        for handle in cache.fonts.values() {
            if handle.release() {
                released += 1;
            }
        }
        for handle in cache.colors.values() {
            if handle.release() {
                released += 1;
            }
        }
        cache.fonts.clear();
        cache.colors.clear();
        log::debug!("released {} pooled resources", released);
    }

    fn live_device(&self) -> Result<Arc<DeviceInner>, RenderError> {
        let device = self
            .device
            .upgrade()
            .ok_or(RenderError::TargetDisposed)?;
        if device.is_disposed() {
            return Err(RenderError::TargetDisposed);
        }
        Ok(device)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, PoolCache> {
        match self.cache.lock() {
            Ok(guard) => guard,
            // A panic while holding the lock leaves the cache intact;
            // handles are still safe to clone and release.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
