use super::{DetectionError, DetectionResult, Real};

pub const DEFAULT_ENTER_THRESHOLD: Real = 0.15;
pub const DEFAULT_EXIT_THRESHOLD: Real = 0.15;
pub const DEFAULT_PEAK_THRESHOLD: Real = 0.5;
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// The three levels which control the hysteresis detector.
///
/// An event opens when a sample reaches `enter` and closes on the first
/// later sample which falls below `exit`. A closed interval is only reported
/// if its largest sample reached `peak`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub enter: Real,
    pub exit: Real,
    pub peak: Real,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            enter: DEFAULT_ENTER_THRESHOLD,
            exit: DEFAULT_EXIT_THRESHOLD,
            peak: DEFAULT_PEAK_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(enter: Real, exit: Real, peak: Real) -> DetectionResult<Self> {
        let thresholds = Self { enter, exit, peak };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Fails if any of the thresholds is NaN or infinite.
    pub fn validate(&self) -> DetectionResult<()> {
        for (name, value) in [
            ("enter_thr", self.enter),
            ("exit_thr", self.exit),
            ("peak_thr", self.peak),
        ] {
            if !value.is_finite() {
                return Err(DetectionError::invalid_parameter(
                    name,
                    value,
                    "threshold must be finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.enter, 0.15);
        assert_eq!(thresholds.exit, 0.15);
        assert_eq!(thresholds.peak, 0.5);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn hysteresis_band_is_allowed() {
        let thresholds = Thresholds::new(0.3, 0.1, 0.6).unwrap();
        assert_eq!(thresholds.enter, 0.3);
        assert_eq!(thresholds.exit, 0.1);
    }

    #[test]
    fn non_finite_thresholds() {
        assert!(matches!(
            Thresholds::new(Real::NAN, 0.15, 0.5),
            Err(DetectionError::InvalidParameter {
                name: "enter_thr",
                ..
            })
        ));
        assert!(matches!(
            Thresholds::new(0.15, Real::INFINITY, 0.5),
            Err(DetectionError::InvalidParameter {
                name: "exit_thr",
                ..
            })
        ));
        assert!(matches!(
            Thresholds::new(0.15, 0.15, Real::NEG_INFINITY),
            Err(DetectionError::InvalidParameter {
                name: "peak_thr",
                ..
            })
        ));
    }
}
