//! Synesthesia - audio signal preprocessing.
//!
//! Three stateless transforms over in-memory sample arrays:
//! channel down-mixing, integer-stride down-sampling and peak normalization.
//!
//! ```
//! use ndarray::array;
//! use synesthesia::{Signal, down_mix, down_sample, normalize};
//!
//! let stereo = Signal::multi_channel(array![[2, 4], [6, 8], [1, 1]]);
//! assert_eq!(down_mix(&stereo)?, array![3.0, 7.0, 1.0]);
//!
//! let mono = Signal::mono(array![0, 1, 2, 3, 4, 5, 6, 7]);
//! let (rate, decimated) = down_sample(&mono, 8000.0, 2)?;
//! assert_eq!(rate, 4000.0);
//! assert_eq!(decimated, Signal::mono(array![0, 2, 4, 6]));
//!
//! let normalized = normalize(&Signal::mono(array![1, -2, 4, -4]))?;
//! assert_eq!(normalized, Signal::mono(array![0.25, -0.5, 1.0, -1.0]));
//! # Ok::<(), synesthesia::Error>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod preprocess;
pub mod signal;

pub use config::{Config, DownSampleConfig, NormalizeConfig, ZeroPeakPolicy};
pub use error::{Error, Result};
pub use preprocess::{
    down_mix, down_sample, down_sample_default, down_sample_with, normalize, normalize_with,
};
pub use signal::{Sample, Signal};
