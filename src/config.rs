// SPDX-License-Identifier: GPL-3.0-only

use crate::backends::{BackendType, CameraRuntime, get_runtime};
use crate::constants::DEFAULT_SYSFS_ROOT;
use std::path::PathBuf;
use tracing::warn;

/// Probe settings, filled from command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Camera runtime to query
    pub backend: BackendType,
    /// Devices directory for the sysfs runtime
    pub sysfs_root: PathBuf,
    /// Indent JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendType::default(),
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            pretty: false,
        }
    }
}

impl Config {
    /// Build the configured runtime
    ///
    /// A backend missing from this build still yields a runtime; every probe
    /// through it reports an error record.
    pub fn runtime(&self) -> Box<dyn CameraRuntime> {
        if !self.backend.is_compiled() {
            warn!(backend = %self.backend, "Runtime not compiled into this build");
        }
        get_runtime(self.backend, &self.sysfs_root)
    }
}
