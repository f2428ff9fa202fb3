//! Decimation by an integer stride.

use crate::config::DownSampleConfig;
use crate::constants::{DEFAULT_DOWN_SAMPLE_FACTOR, SAMPLE_AXIS};
use crate::error::{Error, Result};
use crate::signal::{Sample, Signal};
use ndarray::{Axis, Slice};
use tracing::debug;

/// Keep every `factor`-th sample (indices `0, factor, 2 * factor, ...`).
///
/// Works on both mono and multi-channel signals; the channel axis is left
/// untouched. Returns the new sample rate alongside the decimated signal.
///
/// No anti-aliasing filter is applied.
pub fn down_sample<T: Sample>(
    signal: &Signal<T>,
    sample_rate: f64,
    factor: usize,
) -> Result<(f64, Signal<T>)> {
    if factor == 0 {
        return Err(Error::InvalidArgument {
            name: "factor",
            reason: "must be a positive integer, got 0".to_string(),
        });
    }

    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(Error::InvalidArgument {
            name: "sample_rate",
            reason: format!("must be a positive finite number, got {sample_rate}"),
        });
    }

    let step = isize::try_from(factor).map_err(|_| Error::InvalidArgument {
        name: "factor",
        reason: format!("{factor} exceeds the maximum stride"),
    })?;
    let stride = Slice::new(0, None, step);

    let decimated = match signal {
        Signal::Mono(samples) => {
            Signal::Mono(samples.slice_axis(Axis(SAMPLE_AXIS), stride).to_owned())
        }
        Signal::MultiChannel(frames) => {
            Signal::MultiChannel(frames.slice_axis(Axis(SAMPLE_AXIS), stride).to_owned())
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let new_rate = sample_rate / factor as f64;

    debug!(
        "Down-sampled {} -> {} samples ({} Hz -> {} Hz)",
        signal.num_samples(),
        decimated.num_samples(),
        sample_rate,
        new_rate
    );

    Ok((new_rate, decimated))
}

/// [`down_sample`] with the default factor of 2.
pub fn down_sample_default<T: Sample>(
    signal: &Signal<T>,
    sample_rate: f64,
) -> Result<(f64, Signal<T>)> {
    down_sample(signal, sample_rate, DEFAULT_DOWN_SAMPLE_FACTOR)
}

/// [`down_sample`] using the factor from configuration.
pub fn down_sample_with<T: Sample>(
    signal: &Signal<T>,
    sample_rate: f64,
    config: &DownSampleConfig,
) -> Result<(f64, Signal<T>)> {
    down_sample(signal, sample_rate, config.factor)
}
