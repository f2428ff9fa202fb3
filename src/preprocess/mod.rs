//! Stateless signal transforms.
//!
//! Each transform borrows its input and returns a newly allocated result.

mod decimate;
mod mix;
mod normalize;

pub use decimate::{down_sample, down_sample_default, down_sample_with};
pub use mix::down_mix;
pub use normalize::{normalize, normalize_with};
