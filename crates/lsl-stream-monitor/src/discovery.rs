//! # Stream Discovery
//!
//! [`StreamResolver`] is the seam between the monitor and whatever actually
//! talks to the LSL network. The CLI plugs in a liblsl-backed resolver; tests
//! plug in closures returning canned descriptors.
//!
//! A resolver makes exactly one bounded attempt: it blocks the calling thread
//! for at most `wait_time` seconds and returns every stream seen in that
//! window. There is no retry.

use crate::descriptor::StreamDescriptor;
use crate::error::{MonitorError, MonitorResult};

/// Default discovery wait, in seconds.
pub const DEFAULT_WAIT_TIME_SECS: f64 = 10.0;

/// Something that can list the LSL streams currently visible on the network.
pub trait StreamResolver {
    /// Resolve all streams visible within `wait_time` seconds.
    ///
    /// Returns an empty vector when nothing answered before the timeout.
    /// Fails only when the discovery mechanism itself is broken.
    fn resolve_streams(&self, wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>>;
}

impl<F> StreamResolver for F
where
    F: Fn(f64) -> MonitorResult<Vec<StreamDescriptor>>,
{
    fn resolve_streams(&self, wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>> {
        self(wait_time)
    }
}

/// Reject wait times the LSL library cannot honour.
pub fn validate_wait_time(seconds: f64) -> MonitorResult<f64> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(MonitorError::InvalidWaitTime { seconds })
    }
}
