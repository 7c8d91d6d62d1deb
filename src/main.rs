// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use realsense_status::Config;
use realsense_status::backends::BackendType;
use realsense_status::constants::DEFAULT_SYSFS_ROOT;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "realsense-status")]
#[command(about = "Report Intel RealSense camera connection status as JSON")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    /// Camera runtime to query
    #[arg(long, value_enum, default_value_t = BackendType::default(), global = true)]
    backend: BackendType,

    /// USB devices directory scanned by the sysfs runtime
    #[arg(long, default_value = DEFAULT_SYSFS_ROOT, global = true)]
    sysfs_root: PathBuf,

    /// Indent the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the first connected camera (default)
    Status,

    /// Report every connected camera
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only ever carries the JSON document
    // Set RUST_LOG to control log level, e.g. RUST_LOG=realsense_status=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend: cli.backend,
        sysfs_root: cli.sysfs_root,
        pretty: cli.pretty,
    };

    match cli.command {
        Some(Commands::List) => cli::list_devices(&config)?,
        Some(Commands::Status) | None => cli::print_status(&config)?,
    }

    Ok(())
}
