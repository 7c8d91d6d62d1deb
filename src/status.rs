// SPDX-License-Identifier: GPL-3.0-only

//! Camera status probe
//!
//! [`probe`] asks a [`CameraRuntime`] for the connected devices and turns the
//! outcome into a [`DeviceStatus`]. It has no failure channel: a missing
//! camera becomes an offline record and any runtime failure becomes an error
//! record whose status text carries the runtime's message.

use crate::backends::{BackendResult, CameraDevice, CameraInfo, CameraRuntime};
use crate::constants::{
    DEFAULT_CAMERA_NAME, NOT_AVAILABLE, STATUS_ERROR_PREFIX, STATUS_OFFLINE, STATUS_ONLINE,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// Snapshot of camera connectivity and metadata
///
/// Serializes to a JSON object with exactly these five keys, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub camera_name: String,
    pub status: String,
    pub serial_number: String,
    pub firmware_version: String,
    pub connected: bool,
}

/// Category of a status record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Online,
    Offline,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Online => write!(f, "online"),
            StatusKind::Offline => write!(f, "offline"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

impl DeviceStatus {
    /// Record for a device whose metadata was read successfully
    pub fn online(
        camera_name: impl Into<String>,
        serial_number: impl Into<String>,
        firmware_version: impl Into<String>,
    ) -> Self {
        Self {
            camera_name: camera_name.into(),
            status: STATUS_ONLINE.to_string(),
            serial_number: serial_number.into(),
            firmware_version: firmware_version.into(),
            connected: true,
        }
    }

    /// Record for "no camera attached"
    pub fn offline() -> Self {
        Self {
            camera_name: DEFAULT_CAMERA_NAME.to_string(),
            status: STATUS_OFFLINE.to_string(),
            serial_number: NOT_AVAILABLE.to_string(),
            firmware_version: NOT_AVAILABLE.to_string(),
            connected: false,
        }
    }

    /// Record for a failed probe; the error text follows the status prefix
    pub fn error(err: &dyn fmt::Display) -> Self {
        Self {
            camera_name: DEFAULT_CAMERA_NAME.to_string(),
            status: format!("{}{}", STATUS_ERROR_PREFIX, err),
            serial_number: NOT_AVAILABLE.to_string(),
            firmware_version: NOT_AVAILABLE.to_string(),
            connected: false,
        }
    }

    /// Classify the status text
    ///
    /// Anything that is neither the online nor the offline label counts as
    /// an error.
    pub fn kind(&self) -> StatusKind {
        if self.status == STATUS_ONLINE {
            StatusKind::Online
        } else if self.status == STATUS_OFFLINE {
            StatusKind::Offline
        } else {
            StatusKind::Error
        }
    }

    /// Error message without the status prefix, for error records
    pub fn error_message(&self) -> Option<&str> {
        self.status.strip_prefix(STATUS_ERROR_PREFIX)
    }
}

/// Probe the first connected camera
///
/// A fresh device context is opened for this call and released before it
/// returns.
pub fn probe(runtime: &dyn CameraRuntime) -> DeviceStatus {
    let backend = runtime.backend_type();
    debug!(%backend, "Probing RealSense status");

    match try_probe(runtime) {
        Ok(status) => {
            info!(%backend, kind = %status.kind(), camera = %status.camera_name, "Probe complete");
            status
        }
        Err(err) => {
            warn!(%backend, error = %err, "RealSense probe failed");
            DeviceStatus::error(&err)
        }
    }
}

fn try_probe(runtime: &dyn CameraRuntime) -> BackendResult<DeviceStatus> {
    let context = runtime.create_context()?;
    let devices = context.query_devices()?;
    debug!(count = devices.len(), "Enumerated devices");

    match devices.first() {
        Some(device) => read_device(device.as_ref()),
        None => Ok(DeviceStatus::offline()),
    }
}

/// Probe every connected camera
///
/// One record per device in runtime order. A field read failure only
/// degrades that device's record. No devices yields a single offline
/// record, a context or enumeration failure a single error record.
pub fn probe_all(runtime: &dyn CameraRuntime) -> Vec<DeviceStatus> {
    let backend = runtime.backend_type();
    debug!(%backend, "Probing all RealSense devices");

    // Context stays open while device handles are read
    let context = match runtime.create_context() {
        Ok(context) => context,
        Err(err) => {
            warn!(%backend, error = %err, "Failed to open device context");
            return vec![DeviceStatus::error(&err)];
        }
    };

    let devices = match context.query_devices() {
        Ok(devices) => devices,
        Err(err) => {
            warn!(%backend, error = %err, "RealSense enumeration failed");
            return vec![DeviceStatus::error(&err)];
        }
    };

    if devices.is_empty() {
        return vec![DeviceStatus::offline()];
    }

    devices
        .iter()
        .enumerate()
        .map(|(index, device)| {
            read_device(device.as_ref()).unwrap_or_else(|err| {
                warn!(index, error = %err, "Failed to read device metadata");
                DeviceStatus::error(&err)
            })
        })
        .collect()
}

fn read_device(device: &dyn CameraDevice) -> BackendResult<DeviceStatus> {
    // Only logged, a device without one is still reported
    match device.info(CameraInfo::ProductId) {
        Ok(product_id) => debug!(%product_id, "Reading device metadata"),
        Err(err) => debug!(error = %err, "Reading device metadata without product id"),
    }

    let name = device.info(CameraInfo::Name)?;
    let serial = device.info(CameraInfo::SerialNumber)?;
    let firmware = device.info(CameraInfo::FirmwareVersion)?;
    Ok(DeviceStatus::online(name, serial, firmware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{BackendError, BackendType, DeviceContext};
    use std::cell::Cell;

    #[derive(Clone)]
    struct FakeDevice {
        name: &'static str,
        serial: Option<&'static str>,
        firmware: &'static str,
        product_id: Option<&'static str>,
    }

    impl CameraDevice for FakeDevice {
        fn info(&self, field: CameraInfo) -> BackendResult<String> {
            match field {
                CameraInfo::Name => Ok(self.name.to_string()),
                CameraInfo::SerialNumber => self
                    .serial
                    .map(str::to_string)
                    .ok_or(BackendError::InfoUnavailable(field)),
                CameraInfo::FirmwareVersion => Ok(self.firmware.to_string()),
                CameraInfo::ProductId => self
                    .product_id
                    .map(str::to_string)
                    .ok_or(BackendError::InfoUnavailable(field)),
            }
        }
    }

    struct FakeContext {
        devices: BackendResult<Vec<FakeDevice>>,
    }

    impl DeviceContext for FakeContext {
        fn query_devices(&self) -> BackendResult<Vec<Box<dyn CameraDevice>>> {
            let devices = self.devices.clone()?;
            Ok(devices
                .into_iter()
                .map(|d| Box::new(d) as Box<dyn CameraDevice>)
                .collect())
        }
    }

    struct FakeRuntime {
        devices: BackendResult<Vec<FakeDevice>>,
        contexts_opened: Cell<u32>,
    }

    impl FakeRuntime {
        fn new(devices: BackendResult<Vec<FakeDevice>>) -> Self {
            Self {
                devices,
                contexts_opened: Cell::new(0),
            }
        }
    }

    impl CameraRuntime for FakeRuntime {
        fn create_context(&self) -> BackendResult<Box<dyn DeviceContext>> {
            self.contexts_opened.set(self.contexts_opened.get() + 1);
            Ok(Box::new(FakeContext {
                devices: self.devices.clone(),
            }))
        }

        fn backend_type(&self) -> BackendType {
            BackendType::Sysfs
        }
    }

    fn d435i(serial: &'static str) -> FakeDevice {
        FakeDevice {
            name: "Intel RealSense D435i",
            serial: Some(serial),
            firmware: "5.12.7",
            product_id: Some("0B3A"),
        }
    }

    #[test]
    fn no_devices_is_offline() {
        let status = probe(&FakeRuntime::new(Ok(vec![])));

        assert_eq!(status, DeviceStatus::offline());
        assert_eq!(status.camera_name, "Intel RealSense D435i");
        assert_eq!(status.status, "Offline ❌");
        assert_eq!(status.serial_number, "N/A");
        assert_eq!(status.firmware_version, "N/A");
        assert!(!status.connected);
        assert_eq!(status.kind(), StatusKind::Offline);
    }

    #[test]
    fn first_device_is_reported() {
        let runtime = FakeRuntime::new(Ok(vec![d435i("123456"), d435i("654321")]));
        let status = probe(&runtime);

        assert_eq!(
            status,
            DeviceStatus {
                camera_name: "Intel RealSense D435i".to_string(),
                status: "Online ✅".to_string(),
                serial_number: "123456".to_string(),
                firmware_version: "5.12.7".to_string(),
                connected: true,
            }
        );
        assert_eq!(status.kind(), StatusKind::Online);
    }

    #[test]
    fn enumeration_error_keeps_runtime_message() {
        let runtime = FakeRuntime::new(Err(BackendError::Runtime("device busy".to_string())));
        let status = probe(&runtime);

        assert_eq!(status.status, "Error ⚠️: device busy");
        assert_eq!(status.camera_name, "Intel RealSense D435i");
        assert_eq!(status.serial_number, "N/A");
        assert_eq!(status.firmware_version, "N/A");
        assert!(!status.connected);
        assert_eq!(status.error_message(), Some("device busy"));
    }

    #[test]
    fn field_read_error_degrades_whole_record() {
        let broken = FakeDevice {
            serial: None,
            ..d435i("unused")
        };
        let status = probe(&FakeRuntime::new(Ok(vec![broken])));

        assert_eq!(status.kind(), StatusKind::Error);
        assert_eq!(status.status, "Error ⚠️: serial number not available");
        assert!(!status.connected);
    }

    #[test]
    fn missing_product_id_does_not_degrade() {
        let anonymous = FakeDevice {
            product_id: None,
            ..d435i("123456")
        };
        let status = probe(&FakeRuntime::new(Ok(vec![anonymous])));

        assert_eq!(
            status,
            DeviceStatus::online("Intel RealSense D435i", "123456", "5.12.7")
        );
    }

    #[test]
    fn each_probe_opens_its_own_context() {
        let runtime = FakeRuntime::new(Ok(vec![d435i("123456")]));

        let first = probe(&runtime);
        let second = probe(&runtime);

        assert_eq!(first, second);
        assert_eq!(runtime.contexts_opened.get(), 2);
    }

    #[test]
    fn probe_all_reports_every_device() {
        let broken = FakeDevice {
            serial: None,
            ..d435i("unused")
        };
        let runtime = FakeRuntime::new(Ok(vec![d435i("111"), broken, d435i("333")]));
        let statuses = probe_all(&runtime);

        let kinds: Vec<StatusKind> = statuses.iter().map(DeviceStatus::kind).collect();
        assert_eq!(
            kinds,
            vec![StatusKind::Online, StatusKind::Error, StatusKind::Online]
        );
        assert_eq!(statuses[0].serial_number, "111");
        assert_eq!(statuses[2].serial_number, "333");
    }

    #[test]
    fn probe_all_without_devices_is_single_offline_record() {
        assert_eq!(
            probe_all(&FakeRuntime::new(Ok(vec![]))),
            vec![DeviceStatus::offline()]
        );
    }

    #[test]
    fn connected_matches_online_kind() {
        let samples = [
            DeviceStatus::offline(),
            DeviceStatus::online("a", "b", "c"),
            DeviceStatus::error(&"boom"),
        ];
        for status in samples {
            assert_eq!(status.connected, status.kind() == StatusKind::Online);
        }
    }
}
