// SPDX-License-Identifier: GPL-3.0-only

//! RealSense Status - connection probe for Intel RealSense depth cameras
//!
//! The probe opens a device context from a camera runtime, takes the first
//! enumerated device and reports its name, serial number and firmware
//! version. It never fails: a missing camera or a runtime error is folded
//! into the returned [`DeviceStatus`].
//!
//! # Modules
//!
//! - [`status`]: The probe and its status record
//! - [`backends`]: Camera runtime abstraction (sysfs, librealsense)
//! - [`config`]: Probe settings
//!
//! # Example
//!
//! ```no_run
//! use realsense_status::{Config, probe};
//!
//! let runtime = Config::default().runtime();
//! let status = probe(runtime.as_ref());
//! println!("{}", serde_json::to_string(&status).unwrap());
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod status;

// Re-export commonly used types
pub use config::Config;
pub use status::{DeviceStatus, StatusKind, probe, probe_all};
