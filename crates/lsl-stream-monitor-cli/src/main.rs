//! # lsl-stream-monitor
//!
//! One-shot diagnostic for Lab Streaming Layer setups: resolves every LSL
//! stream visible on the network, prints its metadata, and reports whether
//! heart-rate and RR-interval streams are among them.
//! Network discovery needs liblsl, available with `--features lsl` on
//! Windows and macOS.

#[cfg(all(feature = "lsl", target_os = "linux"))]
compile_error!(
    "The `lsl` feature is currently unsupported on Linux due upstream `lsl-sys` \
build incompatibilities. Build without `--features lsl`, or use Windows/macOS for LSL."
);

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod render;
mod resolver;

use lsl_stream_monitor::{
    ConfigOverrides, MonitorConfig, MonitorResult, discovery, run_discovery,
};

/// Find LSL streams on the local network and check for HR / RR streams.
#[derive(Parser)]
#[command(name = "lsl-stream-monitor", version, about)]
struct Cli {
    /// Path to lsl-monitor.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to wait for streams, in seconds [default: 10]
    #[arg(short, long, value_parser = parse_wait_time)]
    wait_time: Option<f64>,

    /// Enable verbose logging (set RUST_LOG for fine-grained control)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_wait_time(raw: &str) -> Result<f64, String> {
    let seconds: f64 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    discovery::validate_wait_time(seconds).map_err(|e| e.to_string())
}

/// Library and binary share the `lsl_stream_monitor` target prefix.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "lsl_stream_monitor=debug"
    } else {
        "lsl_stream_monitor=warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file and environment, with command-line flags on top.
fn effective_config(cli: &Cli) -> MonitorResult<MonitorConfig> {
    let overrides = ConfigOverrides {
        wait_time_secs: cli.wait_time,
        color: cli.no_color.then_some(false),
    };
    MonitorConfig::discover_with(cli.config.as_deref(), &overrides)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = effective_config(&cli)?;
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "Effective configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    render::write_banner(&mut out, config.wait_time_secs)?;
    out.flush()?;

    let resolver = resolver::network_resolver(&config, cli.verbose);
    let report = run_discovery(&*resolver, &config)?;

    render::write_report(&mut out, &report)?;
    out.flush()?;
    Ok(())
}
