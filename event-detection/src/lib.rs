//! This crate converts a series of probability values into a list of
//! discrete events, each of which is an interval where the signal rose
//! above a threshold, peaked high enough, and fell back down.
//!
//! Typical usage may look like:
//! ```rust
//! use prob_events_detection::{Thresholds, detect, smooth};
//!
//! let series = [0.0, 0.1, 0.3, 0.8, 0.9, 0.4, 0.1, 0.0, 0.0];
//! let smoothed = smooth(&series, 3)?;                     // moving average of length 3
//! let events = detect(&smoothed, &Thresholds::default())?; // enter/exit at 0.15, peak at 0.5
//! assert_eq!(events.len(), 1);
//! # Ok::<(), prob_events_detection::DetectionError>(())
//! ```
//!
//! The same stages are available as iterator adaptors, through
//! [`WindowFilter::window`] and [`EventFilter::events`].

pub mod detection;
pub mod detectors;
pub mod error;
pub mod event;
pub mod iterators;
pub mod parameters;
pub mod smoothing;
pub mod window;

pub use detection::{detect, smooth_and_detect};
pub use detectors::{Detector, HysteresisDetector};
pub use error::{DetectionError, DetectionResult};
pub use event::EventRecord;
pub use iterators::{EventFilter, EventIter};
pub use parameters::{
    DEFAULT_ENTER_THRESHOLD, DEFAULT_EXIT_THRESHOLD, DEFAULT_PEAK_THRESHOLD,
    DEFAULT_SMOOTHING_WINDOW, Thresholds,
};
pub use smoothing::smooth;
pub use window::{MovingAverage, Window, WindowFilter, WindowIter};

pub type Real = f64;
