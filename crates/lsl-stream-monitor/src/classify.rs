//! # HR / RR Classification
//!
//! Splits discovered streams into heart-rate and RR-interval subsets by
//! case-sensitive substring matching on the stream type and name.
//!
//! | Subset | `type` contains | or `name` contains |
//! |--------|-----------------|--------------------|
//! | heart rate | `HeartRate` | `HR` |
//! | RR interval | `RRinterval` | `RR` |
//!
//! A stream can fall into both subsets (e.g. a name containing both `HR`
//! and `RR`).

use crate::descriptor::StreamDescriptor;

/// Type token identifying heart-rate streams.
pub const HEART_RATE_TYPE: &str = "HeartRate";
/// Name token identifying heart-rate streams.
pub const HEART_RATE_NAME: &str = "HR";
/// Type token identifying RR-interval streams.
pub const RR_INTERVAL_TYPE: &str = "RRinterval";
/// Name token identifying RR-interval streams.
pub const RR_INTERVAL_NAME: &str = "RR";

pub fn is_heart_rate(stream: &StreamDescriptor) -> bool {
    stream.stream_type.contains(HEART_RATE_TYPE) || stream.name.contains(HEART_RATE_NAME)
}

pub fn is_rr_interval(stream: &StreamDescriptor) -> bool {
    stream.stream_type.contains(RR_INTERVAL_TYPE) || stream.name.contains(RR_INTERVAL_NAME)
}

/// HR and RR subsets of a discovery result, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub heart_rate: Vec<&'a StreamDescriptor>,
    pub rr_interval: Vec<&'a StreamDescriptor>,
}

impl<'a> Classification<'a> {
    pub fn first_heart_rate(&self) -> Option<&'a StreamDescriptor> {
        self.heart_rate.first().copied()
    }

    pub fn first_rr_interval(&self) -> Option<&'a StreamDescriptor> {
        self.rr_interval.first().copied()
    }

    pub fn status(&self) -> CombinedStatus {
        CombinedStatus::from_presence(!self.heart_rate.is_empty(), !self.rr_interval.is_empty())
    }
}

/// Classify `streams` into heart-rate and RR-interval subsets.
pub fn classify(streams: &[StreamDescriptor]) -> Classification<'_> {
    Classification {
        heart_rate: streams.iter().filter(|s| is_heart_rate(s)).collect(),
        rr_interval: streams.iter().filter(|s| is_rr_interval(s)).collect(),
    }
}

/// Overall verdict printed at the end of a monitor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedStatus {
    BothFound,
    OnlyOneFound,
    NeitherFound,
}

impl CombinedStatus {
    pub fn from_presence(heart_rate: bool, rr_interval: bool) -> Self {
        match (heart_rate, rr_interval) {
            (true, true) => CombinedStatus::BothFound,
            (true, false) | (false, true) => CombinedStatus::OnlyOneFound,
            (false, false) => CombinedStatus::NeitherFound,
        }
    }
}
