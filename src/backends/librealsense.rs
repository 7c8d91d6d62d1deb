// SPDX-License-Identifier: GPL-3.0-only

//! librealsense2 runtime via the `realsense-rust` bindings

use super::types::{BackendError, BackendResult, BackendType, CameraInfo};
use super::{CameraDevice, CameraRuntime, DeviceContext};
use realsense_rust::context::Context;
use realsense_rust::device::Device;
use realsense_rust::kind::Rs2CameraInfo;
use std::collections::HashSet;
use tracing::debug;

/// Runtime backed by the official SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct LibrealsenseRuntime;

impl LibrealsenseRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl CameraRuntime for LibrealsenseRuntime {
    fn create_context(&self) -> BackendResult<Box<dyn DeviceContext>> {
        let context =
            Context::new().map_err(|e| BackendError::ContextUnavailable(e.to_string()))?;
        Ok(Box::new(LibrealsenseContext { context }))
    }

    fn backend_type(&self) -> BackendType {
        BackendType::Librealsense
    }
}

struct LibrealsenseContext {
    context: Context,
}

impl DeviceContext for LibrealsenseContext {
    fn query_devices(&self) -> BackendResult<Vec<Box<dyn CameraDevice>>> {
        // Empty mask matches every product line
        let devices = self.context.query_devices(HashSet::new());
        debug!(count = devices.len(), "librealsense enumerated devices");

        Ok(devices
            .into_iter()
            .map(|device| Box::new(LibrealsenseDevice { device }) as Box<dyn CameraDevice>)
            .collect())
    }
}

struct LibrealsenseDevice {
    device: Device,
}

impl CameraDevice for LibrealsenseDevice {
    fn info(&self, field: CameraInfo) -> BackendResult<String> {
        let kind = match field {
            CameraInfo::Name => Rs2CameraInfo::Name,
            CameraInfo::SerialNumber => Rs2CameraInfo::SerialNumber,
            CameraInfo::FirmwareVersion => Rs2CameraInfo::FirmwareVersion,
            CameraInfo::ProductId => Rs2CameraInfo::ProductId,
        };

        self.device
            .info(kind)
            .map(|value| value.to_string_lossy().into_owned())
            .ok_or(BackendError::InfoUnavailable(field))
    }
}
