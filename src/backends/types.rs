// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera runtimes

/// Metadata field identifier passed to [`super::CameraDevice::info`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraInfo {
    /// Human-readable model name
    Name,
    /// Device serial number
    SerialNumber,
    /// Firmware version string
    FirmwareVersion,
    /// USB product id (four hex digits)
    ProductId,
}

impl std::fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraInfo::Name => write!(f, "name"),
            CameraInfo::SerialNumber => write!(f, "serial number"),
            CameraInfo::FirmwareVersion => write!(f, "firmware version"),
            CameraInfo::ProductId => write!(f, "product id"),
        }
    }
}

/// Camera runtime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BackendType {
    /// Linux USB device descriptors under sysfs
    Sysfs,
    /// Intel librealsense2 SDK
    Librealsense,
}

impl BackendType {
    /// Whether this runtime was compiled into the binary
    pub fn is_compiled(&self) -> bool {
        match self {
            BackendType::Sysfs => true,
            BackendType::Librealsense => cfg!(feature = "librealsense"),
        }
    }
}

impl Default for BackendType {
    fn default() -> Self {
        if cfg!(feature = "librealsense") {
            BackendType::Librealsense
        } else {
            BackendType::Sysfs
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendType::Sysfs => write!(f, "sysfs"),
            BackendType::Librealsense => write!(f, "librealsense"),
        }
    }
}

/// Result type for runtime operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Error types for runtime operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The device context could not be created
    ContextUnavailable(String),
    /// Failure reported by the runtime, message kept verbatim
    Runtime(String),
    /// The device does not expose the requested field
    InfoUnavailable(CameraInfo),
    /// Runtime not compiled into this binary
    Unsupported(BackendType),
    /// General I/O error
    Io(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::ContextUnavailable(msg) => {
                write!(f, "Failed to create device context: {}", msg)
            }
            BackendError::Runtime(msg) => write!(f, "{}", msg),
            BackendError::InfoUnavailable(info) => write!(f, "{} not available", info),
            BackendError::Unsupported(backend) => {
                write!(f, "{} support not compiled into this build", backend)
            }
            BackendError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::Io(err.to_string())
    }
}
