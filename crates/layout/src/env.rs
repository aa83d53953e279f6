use galley_render::{Device, ResourcePool, TextMetrics};
use std::fmt;
use std::sync::Arc;

/// Everything a cursor needs from the outside world: the device whose
/// pool resolves resource descriptions, and the metrics used to
/// measure text. Cloning is cheap and clones share both.
#[derive(Clone)]
pub struct LayoutEnv {
    device: Device,
    metrics: Arc<dyn TextMetrics>,
}

impl LayoutEnv {
    pub fn new(device: Device, metrics: Arc<dyn TextMetrics>) -> Self {
        Self { device, metrics }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    pub fn pool(&self) -> &ResourcePool {
        self.device.resources()
    }
}

impl fmt::Debug for LayoutEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEnv")
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}
