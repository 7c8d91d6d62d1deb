// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! Both commands write a single JSON document to stdout. Logs go to stderr.

use realsense_status::errors::AppResult;
use realsense_status::{Config, probe, probe_all};
use serde::Serialize;
use std::io::Write;

/// Probe the first camera and print its status object
pub fn print_status(config: &Config) -> AppResult<()> {
    let runtime = config.runtime();
    let status = probe(runtime.as_ref());
    write_json(&status, config.pretty)
}

/// Probe every camera and print an array of status objects
pub fn list_devices(config: &Config) -> AppResult<()> {
    let runtime = config.runtime();
    let statuses = probe_all(runtime.as_ref());
    write_json(&statuses, config.pretty)
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
