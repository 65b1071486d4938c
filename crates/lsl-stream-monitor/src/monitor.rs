//! # Monitor Run
//!
//! [`run_discovery`] performs the single bounded discovery call and packages
//! the result as a [`MonitorReport`]. The report is a plain value, so the
//! console renderer and the tests consume the same thing.

use std::time::Instant;

use crate::classify::{Classification, CombinedStatus, classify};
use crate::config::MonitorConfig;
use crate::descriptor::StreamDescriptor;
use crate::discovery::{StreamResolver, validate_wait_time};
use crate::error::MonitorResult;

/// Outcome of one discovery pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorReport {
    streams: Vec<StreamDescriptor>,
}

impl MonitorReport {
    pub fn new(streams: Vec<StreamDescriptor>) -> Self {
        Self { streams }
    }

    /// Discovered streams, in discovery order.
    pub fn streams(&self) -> &[StreamDescriptor] {
        &self.streams
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// HR/RR subsets, or `None` when nothing was discovered.
    ///
    /// An empty discovery never reaches classification, so callers print the
    /// troubleshooting hints instead of a "neither found" verdict.
    pub fn classification(&self) -> Option<Classification<'_>> {
        if self.is_empty() {
            None
        } else {
            Some(classify(&self.streams))
        }
    }

    /// Combined HR/RR verdict; `None` under the same rule as [`Self::classification`].
    pub fn combined_status(&self) -> Option<CombinedStatus> {
        self.classification().map(|c| c.status())
    }
}

/// Run one discovery pass with the configured wait time.
///
/// Blocks for up to `config.wait_time_secs`. Errors from the resolver are
/// returned unchanged; no retry is attempted.
pub fn run_discovery<R>(resolver: &R, config: &MonitorConfig) -> MonitorResult<MonitorReport>
where
    R: StreamResolver + ?Sized,
{
    let wait_time = validate_wait_time(config.wait_time_secs)?;

    tracing::debug!(wait_time, "Resolving LSL streams");
    let started = Instant::now();
    let streams = resolver.resolve_streams(wait_time)?;
    tracing::info!(
        count = streams.len(),
        elapsed = ?started.elapsed(),
        "LSL discovery finished"
    );

    for (index, stream) in streams.iter().enumerate() {
        tracing::debug!(
            index = index + 1,
            name = %stream.name,
            stream_type = %stream.stream_type,
            host = %stream.hostname,
            "Discovered stream"
        );
    }

    Ok(MonitorReport::new(streams))
}
