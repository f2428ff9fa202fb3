//! Peak amplitude normalization.

use crate::config::{NormalizeConfig, ZeroPeakPolicy};
use crate::constants::CHANNEL_AXIS;
use crate::error::{Error, Result};
use crate::signal::{Sample, Signal};
use ndarray::{ArrayView1, Axis};
use tracing::{debug, warn};

/// Scale a signal so its peak absolute amplitude becomes 1.0.
///
/// Mono signals share one global peak. Multi-channel signals are scaled
/// per channel, so every channel peaks at 1.0 independently.
///
/// A zero peak is rejected with [`Error::DivisionByZero`]; use
/// [`normalize_with`] to pass silent channels through instead.
pub fn normalize<T: Sample>(signal: &Signal<T>) -> Result<Signal<f64>> {
    normalize_with(signal, &NormalizeConfig::default())
}

/// [`normalize`] with an explicit zero-peak policy.
pub fn normalize_with<T: Sample>(
    signal: &Signal<T>,
    config: &NormalizeConfig,
) -> Result<Signal<f64>> {
    if signal.num_samples() == 0 {
        return Err(Error::InvalidShape {
            reason: "cannot normalize a signal with no samples".to_string(),
        });
    }

    if signal.num_channels() == 0 {
        return Err(Error::InvalidShape {
            reason: "cannot normalize a signal with no channels".to_string(),
        });
    }

    debug!(
        "Normalizing {} samples x {} channels (zero peak: {})",
        signal.num_samples(),
        signal.num_channels(),
        config.zero_peak
    );

    match signal {
        Signal::Mono(samples) => {
            let mut out = samples.mapv(Sample::to_f64);
            let peak = checked_peak(out.view(), None, config.zero_peak)?;
            if let Some(peak) = peak {
                out.mapv_inplace(|x| x / peak);
            }
            Ok(Signal::Mono(out))
        }
        Signal::MultiChannel(frames) => {
            let mut out = frames.mapv(Sample::to_f64);
            for (channel, mut column) in out.axis_iter_mut(Axis(CHANNEL_AXIS)).enumerate() {
                let peak = checked_peak(column.view(), Some(channel), config.zero_peak)?;
                if let Some(peak) = peak {
                    column.mapv_inplace(|x| x / peak);
                }
            }
            Ok(Signal::MultiChannel(out))
        }
    }
}

/// Peak absolute amplitude of `samples`, or `None` if it is zero and the
/// policy allows passing it through.
fn checked_peak(
    samples: ArrayView1<'_, f64>,
    channel: Option<usize>,
    policy: ZeroPeakPolicy,
) -> Result<Option<f64>> {
    if samples.iter().any(|x| !x.is_finite()) {
        return Err(Error::InvalidArgument {
            name: "signal",
            reason: match channel {
                Some(ch) => format!("channel {ch} contains non-finite samples"),
                None => "contains non-finite samples".to_string(),
            },
        });
    }

    let peak = samples.fold(0.0_f64, |acc, &x| acc.max(x.abs()));
    if peak > 0.0 {
        return Ok(Some(peak));
    }

    match policy {
        ZeroPeakPolicy::Reject => Err(Error::DivisionByZero { channel }),
        ZeroPeakPolicy::Passthrough => {
            match channel {
                Some(ch) => warn!("Channel {ch} is silent, leaving it unscaled"),
                None => warn!("Signal is silent, leaving it unscaled"),
            }
            Ok(None)
        }
    }
}
