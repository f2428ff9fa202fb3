//! Channel down-mixing.

use crate::constants::CHANNEL_AXIS;
use crate::error::{Error, Result};
use crate::signal::{Sample, Signal};
use ndarray::{Array1, Axis};
use tracing::debug;

/// Mix an `N x C` signal down to `N` samples by averaging each frame's channels.
///
/// Mono input is rejected: there is nothing to mix.
pub fn down_mix<T: Sample>(signal: &Signal<T>) -> Result<Array1<f64>> {
    let Signal::MultiChannel(frames) = signal else {
        return Err(Error::InvalidShape {
            reason: "down-mix requires a 2-D (samples x channels) signal, got 1-D".to_string(),
        });
    };

    let channels = frames.ncols();
    if channels == 0 {
        return Err(Error::InvalidShape {
            reason: "down-mix requires at least one channel".to_string(),
        });
    }

    debug!(
        "Down-mixing {} frames across {} channels",
        frames.nrows(),
        channels
    );

    #[allow(clippy::cast_precision_loss)]
    let channel_count = channels as f64;

    Ok(frames.map_axis(Axis(CHANNEL_AXIS), |frame| {
        frame.iter().map(|&s| s.to_f64()).sum::<f64>() / channel_count
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_down_mix_averages_channels() {
        let signal = Signal::multi_channel(array![[2, 4], [6, 8], [1, 1]]);
        let mixed = down_mix(&signal).unwrap();
        assert_eq!(mixed, array![3.0, 7.0, 1.0]);
    }

    #[test]
    fn test_down_mix_single_channel_is_identity() {
        let signal = Signal::multi_channel(array![[0.25f32], [-0.5], [1.0]]);
        let mixed = down_mix(&signal).unwrap();
        assert_eq!(mixed, array![0.25, -0.5, 1.0]);
    }

    #[test]
    fn test_down_mix_does_not_touch_input() {
        let frames = array![[1.0f64, 3.0], [5.0, 7.0]];
        let signal = Signal::multi_channel(frames.clone());
        let _ = down_mix(&signal).unwrap();
        assert_eq!(signal.as_multi_channel().unwrap(), &frames);
    }

    #[test]
    fn test_down_mix_empty_frames() {
        let signal = Signal::multi_channel(Array2::<f32>::zeros((0, 2)));
        let mixed = down_mix(&signal).unwrap();
        assert!(mixed.is_empty());
    }

    #[test]
    fn test_down_mix_rejects_mono() {
        let signal = Signal::mono(array![1.0f32, 2.0]);
        assert!(matches!(
            down_mix(&signal),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_down_mix_rejects_zero_channels() {
        let signal = Signal::multi_channel(Array2::<f32>::zeros((4, 0)));
        assert!(matches!(
            down_mix(&signal),
            Err(Error::InvalidShape { .. })
        ));
    }
}
