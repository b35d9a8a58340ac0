//! Container configuration.

use serde::{Deserialize, Serialize};

/// Container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Number of slots; fixed for the container's lifetime.
    pub slots: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self { slots: 10 }
    }
}

impl ContainerConfig {
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }
}
