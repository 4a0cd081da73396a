use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;

use super::Real;

/// A contiguous interval in which the probability series was above the
/// hysteresis band, together with summary statistics of the samples visited
/// while inside it.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub start: usize,
    pub end: usize,
    pub max_prob: Real,
    pub mean_prob: Real,
    pub area_under_curve: Real,
}

impl EventRecord {
    pub const CSV_HEADER: &'static str = "start,end,max_prob,mean_prob,area_under_curve";

    pub(crate) fn from_values(start: usize, end: usize, max_prob: Real, values: &[Real]) -> Self {
        Self {
            start,
            end,
            max_prob,
            mean_prob: mean(values),
            area_under_curve: trapezoid(values),
        }
    }

    /// Number of index steps between the first and last sample of the event.
    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

impl Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{0},{1},{2},{3},{4}",
            self.start, self.end, self.max_prob, self.mean_prob, self.area_under_curve
        )
    }
}

fn mean(values: &[Real]) -> Real {
    values.iter().sum::<Real>() / values.len() as Real
}

/// Trapezoidal integral with unit sample spacing. Fewer than two samples
/// enclose no area.
fn trapezoid(values: &[Real]) -> Real {
    values
        .iter()
        .tuple_windows()
        .map(|(a, b)| (a + b) / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn statistics() {
        let event = EventRecord::from_values(1, 3, 0.6, &[0.2, 0.6, 0.1]);
        assert_eq!(event.duration(), 2);
        assert_approx_eq!(event.mean_prob, 0.3);
        assert_approx_eq!(event.area_under_curve, 0.4 + 0.35);
    }

    #[test]
    fn single_sample_has_no_area() {
        let event = EventRecord::from_values(4, 4, 0.9, &[0.9]);
        assert_eq!(event.duration(), 0);
        assert_eq!(event.mean_prob, 0.9);
        assert_eq!(event.area_under_curve, 0.0);
    }

    #[test]
    fn csv_row() {
        let event = EventRecord {
            start: 2,
            end: 5,
            max_prob: 0.75,
            mean_prob: 0.5,
            area_under_curve: 1.25,
        };
        assert_eq!(event.to_string(), "2,5,0.75,0.5,1.25");
        assert_eq!(
            EventRecord::CSV_HEADER.split(',').count(),
            event.to_string().split(',').count()
        );
    }

    #[test]
    fn json_keys() {
        let event = EventRecord {
            start: 1,
            end: 3,
            max_prob: 0.5,
            mean_prob: 0.25,
            area_under_curve: 0.5,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": 1,
                "end": 3,
                "max_prob": 0.5,
                "mean_prob": 0.25,
                "area_under_curve": 0.5,
            })
        );
    }
}
