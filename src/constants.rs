// SPDX-License-Identifier: GPL-3.0-only

//! Fixed labels, sentinels and USB identifiers

/// Model label reported when no device could be queried
pub const DEFAULT_CAMERA_NAME: &str = "Intel RealSense D435i";

/// Sentinel for metadata that could not be read
pub const NOT_AVAILABLE: &str = "N/A";

/// Status text for a connected camera
pub const STATUS_ONLINE: &str = "Online ✅";

/// Status text when no camera is attached
pub const STATUS_OFFLINE: &str = "Offline ❌";

/// Prefix of the status text for a failed probe, followed by the error message
pub const STATUS_ERROR_PREFIX: &str = "Error ⚠️: ";

/// Devices directory scanned by the sysfs runtime
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/bus/usb/devices";

/// Intel Corporation USB vendor id
pub const INTEL_VENDOR_ID: u16 = 0x8086;

/// RealSense product ids and the model names librealsense reports for them
pub const REALSENSE_PRODUCTS: &[(u16, &str)] = &[
    (0x0AA5, "Intel RealSense SR300"),
    (0x0ABD, "Intel RealSense D457"),
    (0x0AD1, "Intel RealSense D400"),
    (0x0AD2, "Intel RealSense D410"),
    (0x0AD3, "Intel RealSense D415"),
    (0x0AD4, "Intel RealSense D430"),
    (0x0B07, "Intel RealSense D435"),
    (0x0B37, "Intel RealSense T265"),
    (0x0B3A, "Intel RealSense D435I"),
    (0x0B5B, "Intel RealSense D405"),
    (0x0B5C, "Intel RealSense D455"),
    (0x0B64, "Intel RealSense L515"),
    (0x0B85, "Intel RealSense D456"),
];

/// Look up the model name for a RealSense USB product id
pub fn realsense_model_name(product_id: u16) -> Option<&'static str> {
    REALSENSE_PRODUCTS
        .iter()
        .find(|(pid, _)| *pid == product_id)
        .map(|(_, name)| *name)
}
