//! # lsl-stream-monitor
//!
//! Discover the [Lab Streaming Layer](https://labstreaminglayer.org) streams
//! visible on the local network and check whether heart-rate and RR-interval
//! streams are among them.
//!
//! ## Quick Start
//!
//! ```
//! use lsl_stream_monitor::{
//!     CombinedStatus, MonitorConfig, MonitorResult, StreamDescriptor, run_discovery,
//! };
//!
//! // Any `Fn(f64) -> MonitorResult<Vec<StreamDescriptor>>` is a resolver.
//! let resolver = |_wait: f64| -> MonitorResult<Vec<StreamDescriptor>> {
//!     Ok(vec![
//!         StreamDescriptor::new("Polar RR", "RRinterval", "phone", 1, 0.0, ""),
//!         StreamDescriptor::new("Polar HR", "HeartRate", "phone", 1, 0.0, ""),
//!     ])
//! };
//!
//! let report = run_discovery(&resolver, &MonitorConfig::default())?;
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.combined_status(), Some(CombinedStatus::BothFound));
//! # Ok::<(), lsl_stream_monitor::MonitorError>(())
//! ```
//!
//! The real network resolver lives in the `lsl-stream-monitor-cli` crate,
//! behind its `lsl` feature.

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod monitor;

// ─── Public re-exports ──────────────────────────────────────────────────

pub use classify::{Classification, CombinedStatus, classify};
pub use config::{ConfigOverrides, MonitorConfig};
pub use descriptor::StreamDescriptor;
pub use discovery::{DEFAULT_WAIT_TIME_SECS, StreamResolver};
pub use error::{MonitorError, MonitorResult};
pub use monitor::{MonitorReport, run_discovery};
