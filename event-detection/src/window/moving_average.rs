use std::collections::VecDeque;

use super::{Real, Window};
use crate::{DetectionError, DetectionResult};

/// Unweighted mean of the last `size` samples.
#[derive(Clone, Debug)]
pub struct MovingAverage {
    size: usize,
    sum: Real,
    window: VecDeque<Real>,
}

impl MovingAverage {
    pub fn new(size: usize) -> DetectionResult<Self> {
        if size == 0 {
            return Err(DetectionError::invalid_parameter(
                "window",
                size,
                "window must be positive",
            ));
        }
        // Storage grows with the samples actually pushed, not with `size`
        Ok(MovingAverage {
            size,
            sum: 0.0,
            window: VecDeque::new(),
        })
    }

    pub fn is_full(&self) -> bool {
        self.window.len() == self.size
    }
}

impl Window for MovingAverage {
    type InputType = Real;
    type OutputType = Real;

    fn push(&mut self, value: Real) -> bool {
        if self.is_full() {
            let old = self.window.pop_front().unwrap_or_default();
            self.sum -= old;
        }
        self.sum += value;
        self.window.push_back(value);
        // A NaN or infinity poisons the running sum even after it has left the window
        if !self.sum.is_finite() {
            self.sum = self.window.iter().sum();
        }
        self.is_full()
    }

    fn output(&self) -> Option<Real> {
        if !self.is_full() {
            return None;
        }
        if self.size == 1 {
            // Exact, with no running-sum rounding
            return self.window.back().copied();
        }
        Some(self.sum / self.size as Real)
    }

    fn apply_time_shift(&self, index: usize) -> usize {
        index.saturating_sub(self.size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowFilter;
    use assert_approx_eq::assert_approx_eq;

    fn enumerate(data: &[Real]) -> impl Iterator<Item = (usize, Real)> + '_ {
        data.iter().copied().enumerate()
    }

    #[test]
    fn test_window_size_zero() {
        assert!(matches!(
            MovingAverage::new(0),
            Err(DetectionError::InvalidParameter { name: "window", .. })
        ));
    }

    #[test]
    fn test_window_size_one() {
        let data = [4.0, 3.0, 2.0, 5.0, 6.0, 1.0, 5.0, 7.0, 2.0, 4.0];
        let output: Vec<_> = enumerate(&data)
            .window(MovingAverage::new(1).unwrap())
            .collect();
        assert_eq!(output.len(), data.len());
        for (i, (index, mean)) in output.into_iter().enumerate() {
            assert_eq!(index, i);
            assert_eq!(mean, data[i]);
        }
    }

    #[test]
    fn test_no_data() {
        let data = [];
        assert!(
            enumerate(&data)
                .window(MovingAverage::new(3).unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn test_insufficient_data() {
        let data = [4.0, 3.0];
        assert!(
            enumerate(&data)
                .window(MovingAverage::new(3).unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn test_five_data_three_window() {
        let data = [4.0, 3.0, 1.0, 5.0, 3.0];
        let mut itr = enumerate(&data).window(MovingAverage::new(3).unwrap());

        let (i, mean) = itr.next().unwrap();
        assert_eq!(i, 0);
        assert_approx_eq!(mean, 8. / 3.);

        let (i, mean) = itr.next().unwrap();
        assert_eq!(i, 1);
        assert_approx_eq!(mean, 9. / 3.);

        let (i, mean) = itr.next().unwrap();
        assert_eq!(i, 2);
        assert_approx_eq!(mean, 9. / 3.);

        assert!(itr.next().is_none());
    }

    #[test]
    fn test_non_finite_values_leave_the_window() {
        let data = [1.0, Real::NAN, 2.0, 3.0, 4.0, Real::INFINITY, 5.0, 6.0, 7.0];
        let output: Vec<_> = enumerate(&data)
            .window(MovingAverage::new(2).unwrap())
            .map(|(_, mean)| mean)
            .collect();
        assert_eq!(output.len(), 8);
        assert!(output[0].is_nan());
        assert!(output[1].is_nan());
        assert_approx_eq!(output[2], 2.5);
        assert_approx_eq!(output[3], 3.5);
        assert_eq!(output[4], Real::INFINITY);
        assert_eq!(output[5], Real::INFINITY);
        assert_approx_eq!(output[6], 5.5);
        assert_approx_eq!(output[7], 6.5);
    }

    #[test]
    fn test_huge_window_does_not_allocate() {
        let data = [0.1, 0.2];
        assert!(
            enumerate(&data)
                .window(MovingAverage::new(usize::MAX).unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn test_mean_accuracy() {
        use rand::random;
        let data: Vec<Real> = (0..1000).map(|_| random()).collect();

        for window_size in 1..50 {
            let mut itr = enumerate(&data).window(MovingAverage::new(window_size).unwrap());
            let mut count = 0;
            while let Some((index, mean)) = itr.next() {
                assert!(itr.get_window().is_full());
                let expected = data[index..index + window_size].iter().sum::<Real>()
                    / window_size as Real;
                assert_approx_eq!(mean, expected);
                count += 1;
            }
            assert_eq!(count, data.len() - window_size + 1);
        }
    }
}
