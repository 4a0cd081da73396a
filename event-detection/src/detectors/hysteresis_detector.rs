use std::mem;
use tracing::{debug, trace};

use super::{Detector, EventRecord, Real, Thresholds};

/// Samples gathered since the detector last entered an event.
#[derive(Debug, Clone)]
struct Accumulator {
    start: usize,
    running_max: Real,
    values: Vec<Real>,
}

impl Accumulator {
    fn new(start: usize, value: Real) -> Self {
        Self {
            start,
            running_max: value,
            values: vec![value],
        }
    }

    fn push(&mut self, value: Real) {
        self.values.push(value);
        self.running_max = self.running_max.max(value);
    }
}

#[derive(Default, Debug, Clone)]
enum State {
    #[default]
    Idle,
    InEvent(Accumulator),
}

/// Two-state detector which opens an event when the signal reaches the
/// enter threshold and closes it when the signal drops below the exit
/// threshold. Closed intervals whose maximum never reached the peak
/// threshold are discarded.
#[derive(Default, Debug, Clone)]
pub struct HysteresisDetector {
    thresholds: Thresholds,
    state: State,
    last_index: Option<usize>,
}

impl HysteresisDetector {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            thresholds: *thresholds,
            ..Default::default()
        }
    }

    fn close(&self, accumulator: Accumulator, end: usize) -> Option<EventRecord> {
        if accumulator.running_max >= self.thresholds.peak {
            let event = EventRecord::from_values(
                accumulator.start,
                end,
                accumulator.running_max,
                &accumulator.values,
            );
            debug!(
                start = event.start,
                end = event.end,
                max_prob = event.max_prob,
                "Event detected"
            );
            Some(event)
        } else {
            trace!(
                start = accumulator.start,
                end,
                max_prob = accumulator.running_max,
                "Interval below peak threshold discarded"
            );
            None
        }
    }
}

impl Detector for HysteresisDetector {
    type EventPointType = EventRecord;

    fn signal(&mut self, index: usize, value: Real) -> Option<EventRecord> {
        self.last_index = Some(index);
        match mem::take(&mut self.state) {
            State::Idle => {
                // The entry sample is never tested against the exit threshold
                if value >= self.thresholds.enter {
                    self.state = State::InEvent(Accumulator::new(index, value));
                }
                None
            }
            State::InEvent(mut accumulator) => {
                accumulator.push(value);
                if value < self.thresholds.exit {
                    self.close(accumulator, index)
                } else {
                    self.state = State::InEvent(accumulator);
                    None
                }
            }
        }
    }

    fn finish(&mut self) -> Option<EventRecord> {
        let last_index = self.last_index.take();
        match mem::take(&mut self.state) {
            State::Idle => None,
            State::InEvent(accumulator) => {
                let end = last_index.unwrap_or(accumulator.start);
                self.close(accumulator, end)
            }
        }
    }
}
