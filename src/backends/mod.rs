// SPDX-License-Identifier: GPL-3.0-only

//! Camera runtime abstraction
//!
//! The probe never talks to hardware directly. It goes through a
//! [`CameraRuntime`], which hands out a [`DeviceContext`] per probe, which in
//! turn enumerates [`CameraDevice`] handles.
//!
//! ```text
//! ┌─────────────────────┐
//! │    Status Probe     │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CameraRuntime Trait │  ← One context per probe
//! └──────────┬──────────┘
//!            │
//!       ┌────┴─────────┐
//!       ▼              ▼
//!   ┌───────┐   ┌──────────────┐
//!   │ sysfs │   │ librealsense │  ← feature = "librealsense"
//!   └───────┘   └──────────────┘
//! ```

#[cfg(feature = "librealsense")]
pub mod librealsense;
pub mod sysfs;
pub mod types;

pub use types::*;

use std::path::Path;

/// Source of device contexts
///
/// Implementations wrap a vendor runtime. A fresh context is created for
/// every probe and dropped when the probe returns.
pub trait CameraRuntime {
    /// Open a device context
    fn create_context(&self) -> BackendResult<Box<dyn DeviceContext>>;

    /// Get the runtime type identifier
    fn backend_type(&self) -> BackendType;
}

/// An open device context
pub trait DeviceContext {
    /// List connected devices in the order the runtime reports them
    fn query_devices(&self) -> BackendResult<Vec<Box<dyn CameraDevice>>>;
}

/// Handle to one connected device
pub trait CameraDevice {
    /// Read a metadata field as text
    fn info(&self, field: CameraInfo) -> BackendResult<String>;
}

/// Runtime standing in for a backend that was not compiled in
///
/// Every context request fails, so the probe reports an error record.
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedRuntime(pub BackendType);

impl CameraRuntime for UnsupportedRuntime {
    fn create_context(&self) -> BackendResult<Box<dyn DeviceContext>> {
        Err(BackendError::Unsupported(self.0))
    }

    fn backend_type(&self) -> BackendType {
        self.0
    }
}

/// Get a runtime instance for the given type
///
/// `sysfs_root` is only used by the sysfs runtime.
pub fn get_runtime(backend_type: BackendType, sysfs_root: &Path) -> Box<dyn CameraRuntime> {
    match backend_type {
        BackendType::Sysfs => Box::new(sysfs::SysfsRuntime::new(sysfs_root)),
        #[cfg(feature = "librealsense")]
        BackendType::Librealsense => Box::new(librealsense::LibrealsenseRuntime::new()),
        #[cfg(not(feature = "librealsense"))]
        BackendType::Librealsense => Box::new(UnsupportedRuntime(backend_type)),
    }
}
