//! # Stream Descriptors
//!
//! [`StreamDescriptor`] is the read-only metadata of one stream visible on the
//! LSL network. Descriptors are filled in once by a
//! [`StreamResolver`](crate::discovery::StreamResolver) and never mutated.
//!
//! ```
//! use lsl_stream_monitor::StreamDescriptor;
//!
//! let hr = StreamDescriptor::new("Polar HR", "HeartRate", "lab-pc", 1, 0.0, "");
//! assert!(hr.is_irregular_rate());
//! assert!(hr.source_id.is_empty());
//! ```

/// Nominal sample rate that marks a stream as irregular (event-driven).
pub const IRREGULAR_RATE: f64 = 0.0;

/// Metadata of a single discovered LSL stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDescriptor {
    /// Stream name, e.g. `"Polar H10 HR"`.
    pub name: String,

    /// Semantic content type, e.g. `"HeartRate"`, `"RRinterval"`, `"EEG"`.
    pub stream_type: String,

    /// Host the outlet runs on.
    pub hostname: String,

    /// Number of channels per sample.
    pub channel_count: u32,

    /// Nominal sampling rate in Hz; [`IRREGULAR_RATE`] for irregular streams.
    pub nominal_srate: f64,

    /// Unique source identifier; may be empty.
    pub source_id: String,
}

impl StreamDescriptor {
    pub fn new(
        name: impl Into<String>,
        stream_type: impl Into<String>,
        hostname: impl Into<String>,
        channel_count: u32,
        nominal_srate: f64,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stream_type: stream_type.into(),
            hostname: hostname.into(),
            channel_count,
            nominal_srate,
            source_id: source_id.into(),
        }
    }

    /// `true` when the stream has no fixed sampling rate.
    #[allow(clippy::float_cmp)]
    pub fn is_irregular_rate(&self) -> bool {
        self.nominal_srate == IRREGULAR_RATE
    }
}
