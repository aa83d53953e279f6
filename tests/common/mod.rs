pub mod fixtures;
pub mod fragment_assertions;

use galley::{Device, LayoutEnv, MemoryTarget, MonoMetrics};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Layout environment over the in-memory backend. [`MonoMetrics`] is
/// fixed-pitch (glyphs 0.6 x size wide, lines 1.2 x size tall), so
/// every size asserted in these tests is exact.
pub fn test_env() -> LayoutEnv {
    let _ = env_logger::builder().is_test(true).try_init();
    LayoutEnv::new(Device::new(MemoryTarget::new()), Arc::new(MonoMetrics))
}

/// Like [`test_env`] but also hands back the device for disposal
/// checks.
pub fn test_env_with_device() -> (LayoutEnv, Device) {
    let env = test_env();
    let device = env.device().clone();
    (env, device)
}
