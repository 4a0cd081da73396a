use tracing::debug;

use super::{
    DetectionResult, EventFilter, EventRecord, HysteresisDetector, Real, Thresholds, smooth,
};

/// Scans `prob_series` once and returns every event which passes the peak
/// gate, ordered by start index.
///
/// # Errors
/// [`DetectionError::InvalidParameter`](crate::DetectionError::InvalidParameter)
/// if any threshold is not finite.
#[tracing::instrument(skip_all, level = "debug", fields(
    num_samples = prob_series.len(),
    enter_thr = thresholds.enter,
    exit_thr = thresholds.exit,
    peak_thr = thresholds.peak,
))]
pub fn detect(prob_series: &[Real], thresholds: &Thresholds) -> DetectionResult<Vec<EventRecord>> {
    thresholds.validate()?;

    let events: Vec<EventRecord> = prob_series
        .iter()
        .copied()
        .enumerate()
        .events(HysteresisDetector::new(thresholds))
        .collect();

    debug!(num_events = events.len(), "Detection complete");
    Ok(events)
}

/// Runs the full pipeline: smooths `prob_series` if a window is given, then
/// detects events on the result.
pub fn smooth_and_detect(
    prob_series: &[Real],
    smoothing_window: Option<usize>,
    thresholds: &Thresholds,
) -> DetectionResult<Vec<EventRecord>> {
    thresholds.validate()?;
    match smoothing_window {
        Some(window) => detect(&smooth(prob_series, window)?, thresholds),
        None => detect(prob_series, thresholds),
    }
}
