pub mod hysteresis_detector;

use super::{EventRecord, Real, Thresholds};
pub use hysteresis_detector::HysteresisDetector;

/// A stateful scanner which is fed one sample at a time.
pub trait Detector: Clone {
    type EventPointType;

    /// Processes the sample at `index`, returning an event if this sample
    /// completed one.
    fn signal(&mut self, index: usize, value: Real) -> Option<Self::EventPointType>;

    /// Called once after the final sample, to flush any event still open.
    fn finish(&mut self) -> Option<Self::EventPointType>;
}
