use std::str::FromStr;

use anyhow::{Error, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use prob_events_detection::{
    DEFAULT_ENTER_THRESHOLD, DEFAULT_EXIT_THRESHOLD, DEFAULT_PEAK_THRESHOLD,
    DEFAULT_SMOOTHING_WINDOW, DetectionResult, Real, Thresholds,
};

#[derive(Debug, Clone)]
pub(crate) struct ThresholdsWrapper(pub(crate) Thresholds);

impl FromStr for ThresholdsWrapper {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals: Vec<_> = s.split(',').map(str::trim).collect();
        let [enter, exit, peak] = vals.as_slice() else {
            return Err(anyhow!(
                "Incorrect number of parameters in thresholds, expected pattern 'enter,exit,peak', got '{s}'"
            ));
        };
        Ok(ThresholdsWrapper(Thresholds::new(
            Real::from_str(enter)?,
            Real::from_str(exit)?,
            Real::from_str(peak)?,
        )?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct SmoothParameters {
    /// Length of the moving average window
    #[clap(long, default_value_t = DEFAULT_SMOOTHING_WINDOW)]
    pub(crate) window: usize,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct DetectParameters {
    /// If set, the series is smoothed with a moving average of this length before detection
    #[clap(long)]
    pub(crate) smoothing_window: Option<usize>,

    /// All three thresholds at once, as 'enter,exit,peak'
    #[clap(long, conflicts_with_all = ["enter_threshold", "exit_threshold", "peak_threshold"])]
    pub(crate) thresholds: Option<ThresholdsWrapper>,

    #[clap(long, default_value_t = DEFAULT_ENTER_THRESHOLD)]
    pub(crate) enter_threshold: Real,

    #[clap(long, default_value_t = DEFAULT_EXIT_THRESHOLD)]
    pub(crate) exit_threshold: Real,

    #[clap(long, default_value_t = DEFAULT_PEAK_THRESHOLD)]
    pub(crate) peak_threshold: Real,
}

impl DetectParameters {
    pub(crate) fn thresholds(&self) -> DetectionResult<Thresholds> {
        match &self.thresholds {
            Some(ThresholdsWrapper(thresholds)) => Ok(*thresholds),
            None => Thresholds::new(
                self.enter_threshold,
                self.exit_threshold,
                self.peak_threshold,
            ),
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum Mode {
    #[clap(about = "Smooths the series with a moving average and writes the result.")]
    Smooth(SmoothParameters),
    #[clap(
        about = "Detects events in the (optionally smoothed) series. Events consist of start and end indices and summary statistics."
    )]
    Detect(DetectParameters),
}
