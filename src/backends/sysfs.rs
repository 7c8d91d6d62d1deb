// SPDX-License-Identifier: GPL-3.0-only

//! RealSense discovery through Linux USB sysfs attributes
//!
//! Each USB device appears as a directory under `/sys/bus/usb/devices`
//! carrying its descriptor fields as text attributes (`idVendor`,
//! `idProduct`, `serial`, `bcdDevice`, ...). Interface directories such as
//! `2-1:1.0` have no `idVendor` and are skipped.

use super::types::{BackendError, BackendResult, BackendType, CameraInfo};
use super::{CameraDevice, CameraRuntime, DeviceContext};
use crate::constants::{INTEL_VENDOR_ID, realsense_model_name};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Runtime reading USB descriptors from a sysfs devices directory
#[derive(Debug, Clone)]
pub struct SysfsRuntime {
    root: PathBuf,
}

impl SysfsRuntime {
    /// Create a runtime scanning `root` (normally `/sys/bus/usb/devices`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CameraRuntime for SysfsRuntime {
    fn create_context(&self) -> BackendResult<Box<dyn DeviceContext>> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(Box::new(SysfsContext {
                root: self.root.clone(),
            })),
            Ok(_) => Err(BackendError::ContextUnavailable(format!(
                "{} is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(BackendError::ContextUnavailable(format!(
                "{}: {}",
                self.root.display(),
                e
            ))),
        }
    }

    fn backend_type(&self) -> BackendType {
        BackendType::Sysfs
    }
}

struct SysfsContext {
    root: PathBuf,
}

impl DeviceContext for SysfsContext {
    fn query_devices(&self) -> BackendResult<Vec<Box<dyn CameraDevice>>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();

        // read_dir order is filesystem dependent
        paths.sort();

        let mut devices: Vec<Box<dyn CameraDevice>> = Vec::new();
        for path in paths {
            if let Some(device) = SysfsDevice::from_path(&path) {
                debug!(
                    path = %path.display(),
                    model = device.model,
                    "Found RealSense device"
                );
                devices.push(Box::new(device));
            }
        }

        Ok(devices)
    }
}

/// A RealSense device directory
#[derive(Debug, Clone)]
struct SysfsDevice {
    path: PathBuf,
    product_id: u16,
    model: &'static str,
}

impl SysfsDevice {
    /// Returns `None` for anything that is not a readable RealSense device
    fn from_path(path: &Path) -> Option<Self> {
        let vendor_id = read_hex_attribute(path, "idVendor")?;
        if vendor_id != INTEL_VENDOR_ID {
            trace!(path = %path.display(), vendor_id, "Skipping non-Intel device");
            return None;
        }

        let product_id = read_hex_attribute(path, "idProduct")?;
        let Some(model) = realsense_model_name(product_id) else {
            trace!(path = %path.display(), product_id, "Skipping non-RealSense Intel device");
            return None;
        };

        Some(Self {
            path: path.to_path_buf(),
            product_id,
            model,
        })
    }

    fn read_attribute(&self, name: &str, field: CameraInfo) -> BackendResult<String> {
        match fs::read_to_string(self.path.join(name)) {
            Ok(value) => {
                let value = value.trim();
                if value.is_empty() {
                    Err(BackendError::InfoUnavailable(field))
                } else {
                    Ok(value.to_string())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BackendError::InfoUnavailable(field)),
            Err(e) => Err(e.into()),
        }
    }
}

impl CameraDevice for SysfsDevice {
    fn info(&self, field: CameraInfo) -> BackendResult<String> {
        match field {
            CameraInfo::Name => Ok(self.model.to_string()),
            CameraInfo::SerialNumber => self.read_attribute("serial", field),
            CameraInfo::FirmwareVersion => {
                let raw = self.read_attribute("bcdDevice", field)?;
                decode_firmware_version(&raw).ok_or_else(|| {
                    BackendError::Runtime(format!("invalid bcdDevice value '{}'", raw))
                })
            }
            CameraInfo::ProductId => Ok(format!("{:04X}", self.product_id)),
        }
    }
}

fn read_hex_attribute(path: &Path, name: &str) -> Option<u16> {
    let raw = fs::read_to_string(path.join(name)).ok()?;
    u16::from_str_radix(raw.trim(), 16).ok()
}

/// Decode the firmware version RealSense packs into `bcdDevice`
///
/// The top nibble is the major version, the middle byte the minor and the
/// low nibble the patch level: `50c7` → `5.12.7`.
pub fn decode_firmware_version(raw: &str) -> Option<String> {
    let value = u16::from_str_radix(raw.trim(), 16).ok()?;
    Some(format!(
        "{}.{}.{}",
        value >> 12,
        (value >> 4) & 0xff,
        value & 0xf
    ))
}
