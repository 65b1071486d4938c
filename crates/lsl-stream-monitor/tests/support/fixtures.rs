//! Canned discovery results for the scenario tests.

use std::cell::RefCell;

use lsl_stream_monitor::{MonitorError, MonitorResult, StreamDescriptor, StreamResolver};

pub fn polar_hr() -> StreamDescriptor {
    StreamDescriptor::new("Polar HR", "HeartRate", "pixel-7", 1, 1.0, "polar-h10-A1B2")
}

pub fn polar_rr() -> StreamDescriptor {
    StreamDescriptor::new("Polar RR", "RRinterval", "pixel-7", 1, 0.0, "polar-h10-A1B2")
}

pub fn eeg() -> StreamDescriptor {
    StreamDescriptor::new("EEG1", "EEG", "lab-amp", 8, 250.0, "")
}

/// Resolver returning a fixed list and recording every wait time it was given.
pub struct FixtureResolver {
    streams: Vec<StreamDescriptor>,
    calls: RefCell<Vec<f64>>,
}

impl FixtureResolver {
    pub fn new(streams: Vec<StreamDescriptor>) -> Self {
        Self {
            streams,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<f64> {
        self.calls.borrow().clone()
    }
}

impl StreamResolver for FixtureResolver {
    fn resolve_streams(&self, wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>> {
        self.calls.borrow_mut().push(wait_time);
        Ok(self.streams.clone())
    }
}

/// Resolver standing in for a host without a working LSL library.
pub struct BrokenResolver;

impl StreamResolver for BrokenResolver {
    fn resolve_streams(&self, _wait_time: f64) -> MonitorResult<Vec<StreamDescriptor>> {
        Err(MonitorError::DiscoveryUnavailable {
            reason: "liblsl not found".into(),
        })
    }
}
