use std::iter;
use tracing::debug;

use super::{DetectionError, DetectionResult, MovingAverage, Real, WindowFilter};

/// Applies a moving-average low-pass filter to `x`.
///
/// The series is padded with `window / 2` copies of its first value on the
/// left and `window / 2` copies of its last value on the right, and each
/// output is the mean of `window` consecutive padded samples. The result
/// always has the same length as `x`.
///
/// For an even `window` the padded series yields one surplus output, which is
/// dropped from the end. Each output `i` then covers the input samples
/// `i - window / 2 ..= i + window / 2 - 1`.
///
/// # Errors
/// [`DetectionError::InvalidParameter`] if `window` is zero, or so large that
/// the padded series length does not fit in a `usize`.
#[tracing::instrument(skip_all, level = "debug", fields(num_samples = x.len(), window = window))]
pub fn smooth(x: &[Real], window: usize) -> DetectionResult<Vec<Real>> {
    let moving_average = MovingAverage::new(window)?;

    let (Some(&first), Some(&last)) = (x.first(), x.last()) else {
        return Ok(Vec::new());
    };
    let pad_width = window / 2;
    if x.len().checked_add(2 * pad_width).is_none() {
        return Err(DetectionError::invalid_parameter(
            "window",
            window,
            "padded series length overflows",
        ));
    }

    let smoothed: Vec<Real> = iter::repeat_n(first, pad_width)
        .chain(x.iter().copied())
        .chain(iter::repeat_n(last, pad_width))
        .enumerate()
        .window(moving_average)
        .map(|(_, mean)| mean)
        .take(x.len())
        .collect();

    debug!(num_smoothed = smoothed.len(), "Series smoothed");
    Ok(smoothed)
}
