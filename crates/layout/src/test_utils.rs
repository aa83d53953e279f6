//! Helpers shared by the unit tests in this crate.

use crate::env::LayoutEnv;
use galley_render::{Device, MemoryTarget, MonoMetrics};
use std::sync::Arc;

/// Environment over the in-memory backend: fixed-pitch metrics, every
/// measurement deterministic.
pub(crate) fn test_env() -> LayoutEnv {
    let _ = env_logger::builder().is_test(true).try_init();
    LayoutEnv::new(Device::new(MemoryTarget::new()), Arc::new(MonoMetrics))
}
