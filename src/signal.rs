//! In-memory signal representation.
//!
//! A signal is either mono (shape `N`) or multi-channel (shape `N x C`).
//! The sample axis is always axis 0; the channel axis, when present, is axis 1.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayD, Ix1, Ix2};
use std::fmt::Debug;

/// Numeric sample type accepted by the transforms.
///
/// Implemented for every type that converts losslessly into `f64`
/// (`f32`, `f64`, `i8`, `i16`, `i32`, `u8`, `u16`, `u32`).
pub trait Sample: Copy + Debug {
    /// Widen the sample to `f64`.
    fn to_f64(self) -> f64;
}

impl<T> Sample for T
where
    T: Copy + Debug + Into<f64>,
{
    fn to_f64(self) -> f64 {
        self.into()
    }
}

/// Audio samples tagged by dimensionality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T> {
    /// Single channel, shape `N`.
    Mono(Array1<T>),
    /// Multiple channels, shape `N x C` with one row per sample frame.
    MultiChannel(Array2<T>),
}

impl<T: Sample> Signal<T> {
    /// Wrap a 1-D array as a mono signal.
    pub fn mono(samples: Array1<T>) -> Self {
        Self::Mono(samples)
    }

    /// Wrap an `N x C` array as a multi-channel signal.
    pub fn multi_channel(frames: Array2<T>) -> Self {
        Self::MultiChannel(frames)
    }

    /// Build an `N x C` signal from a frame-major interleaved buffer
    /// (`[L0, R0, L1, R1, ...]` for stereo).
    pub fn from_interleaved(samples: Vec<T>, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidShape {
                reason: "interleaved buffer must have at least one channel".to_string(),
            });
        }

        if !samples.len().is_multiple_of(channels) {
            return Err(Error::InvalidShape {
                reason: format!(
                    "interleaved buffer of {} samples is not a whole number of {channels}-channel frames",
                    samples.len()
                ),
            });
        }

        let frames = samples.len() / channels;
        Array2::from_shape_vec((frames, channels), samples)
            .map(Self::MultiChannel)
            .map_err(|e| Error::InvalidShape {
                reason: e.to_string(),
            })
    }

    /// Number of samples along the sample axis.
    pub fn num_samples(&self) -> usize {
        match self {
            Self::Mono(samples) => samples.len(),
            Self::MultiChannel(frames) => frames.nrows(),
        }
    }

    /// Number of channels (1 for mono).
    pub fn num_channels(&self) -> usize {
        match self {
            Self::Mono(_) => 1,
            Self::MultiChannel(frames) => frames.ncols(),
        }
    }

    /// Returns true if this is a mono signal.
    pub fn is_mono(&self) -> bool {
        matches!(self, Self::Mono(_))
    }

    /// Borrow the mono samples, if this is a mono signal.
    pub fn as_mono(&self) -> Option<&Array1<T>> {
        match self {
            Self::Mono(samples) => Some(samples),
            Self::MultiChannel(_) => None,
        }
    }

    /// Borrow the `N x C` frames, if this is a multi-channel signal.
    pub fn as_multi_channel(&self) -> Option<&Array2<T>> {
        match self {
            Self::Mono(_) => None,
            Self::MultiChannel(frames) => Some(frames),
        }
    }

    /// Unwrap into a dynamic-rank array.
    pub fn into_dyn(self) -> ArrayD<T> {
        match self {
            Self::Mono(samples) => samples.into_dyn(),
            Self::MultiChannel(frames) => frames.into_dyn(),
        }
    }
}

impl<T: Sample> TryFrom<ArrayD<T>> for Signal<T> {
    type Error = Error;

    fn try_from(array: ArrayD<T>) -> Result<Self> {
        let shape_err = |e: ndarray::ShapeError| Error::InvalidShape {
            reason: e.to_string(),
        };

        match array.ndim() {
            1 => array
                .into_dimensionality::<Ix1>()
                .map(Self::Mono)
                .map_err(shape_err),
            2 => array
                .into_dimensionality::<Ix2>()
                .map(Self::MultiChannel)
                .map_err(shape_err),
            rank => Err(Error::InvalidShape {
                reason: format!("expected a 1-D or 2-D signal, got {rank} dimensions"),
            }),
        }
    }
}

impl<T: Sample> From<Array1<T>> for Signal<T> {
    fn from(samples: Array1<T>) -> Self {
        Self::Mono(samples)
    }
}

impl<T: Sample> From<Array2<T>> for Signal<T> {
    fn from(frames: Array2<T>) -> Self {
        Self::MultiChannel(frames)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ndarray::{IxDyn, array};

    #[test]
    fn test_from_interleaved_stereo() {
        let signal = Signal::from_interleaved(vec![1i16, 2, 3, 4, 5, 6], 2).unwrap();

        assert_eq!(signal.num_samples(), 3);
        assert_eq!(signal.num_channels(), 2);
        assert_eq!(
            signal.as_multi_channel().unwrap(),
            &array![[1i16, 2], [3, 4], [5, 6]]
        );
    }

    #[test]
    fn test_from_interleaved_rejects_partial_frame() {
        let result = Signal::from_interleaved(vec![1.0f32, 2.0, 3.0], 2);
        assert!(matches!(result, Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn test_from_interleaved_rejects_zero_channels() {
        let result = Signal::from_interleaved(vec![1.0f32], 0);
        assert!(matches!(result, Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn test_try_from_dyn_dispatches_on_rank() {
        let mono = ArrayD::from_shape_vec(IxDyn(&[4]), vec![0.0f64, 1.0, 2.0, 3.0]).unwrap();
        let signal = Signal::try_from(mono).unwrap();
        assert!(signal.is_mono());
        assert_eq!(signal.num_samples(), 4);

        // A single-frame stereo array is still 2-D, regardless of its sample count.
        let stereo = ArrayD::from_shape_vec(IxDyn(&[1, 2]), vec![0.5f64, -0.5]).unwrap();
        let signal = Signal::try_from(stereo).unwrap();
        assert!(!signal.is_mono());
        assert_eq!(signal.num_samples(), 1);
        assert_eq!(signal.num_channels(), 2);
    }

    #[test]
    fn test_try_from_dyn_rejects_other_ranks() {
        let cube = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 2]));
        let err = Signal::try_from(cube).unwrap_err();
        assert!(err.to_string().contains("got 3 dimensions"));

        let scalar = ArrayD::<f32>::zeros(IxDyn(&[]));
        assert!(matches!(
            Signal::try_from(scalar),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_into_dyn_preserves_shape() {
        let signal = Signal::multi_channel(array![[1u8, 2, 3], [4, 5, 6]]);
        assert_eq!(signal.into_dyn().shape(), &[2, 3]);
    }
}
