//! Library-wide constants.
//!
//! Defaults shared by the transforms and the configuration layer.

/// Default decimation stride for [`down_sample`](crate::preprocess::down_sample).
pub const DEFAULT_DOWN_SAMPLE_FACTOR: usize = 2;

/// Axis holding samples in every signal shape.
pub const SAMPLE_AXIS: usize = 0;

/// Axis holding channels in multi-channel signals.
pub const CHANNEL_AXIS: usize = 1;

/// Config keys as they appear in TOML files.
pub mod config_keys {
    /// Zero-peak policy value that rejects silent channels.
    pub const ZERO_PEAK_REJECT: &str = "reject";

    /// Zero-peak policy value that passes silent channels through.
    pub const ZERO_PEAK_PASSTHROUGH: &str = "passthrough";
}
