mod output;
mod parameters;
mod series;

use anyhow::Context;
use clap::Parser;
use parameters::{Mode, OutputFormat};
use prob_events_common::{LoggingOpts, init_tracer};
use prob_events_detection::{EventRecord, smooth, smooth_and_detect};
use std::{io, path::PathBuf};
use tracing::info;

// cargo run --bin prob-to-events -- --input scores.json detect --smoothing-window 5 --thresholds=0.15,0.15,0.5

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// JSON file containing an array of probabilities, if not set then stdin is read
    #[clap(long)]
    input: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    output_format: OutputFormat,

    #[clap(flatten)]
    logging: LoggingOpts,

    #[command(subcommand)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let _tracer = init_tracer!(args.logging);

    let series = series::load_series(args.input.as_deref())?;
    info!(num_samples = series.len(), "Series loaded");

    let stdout = io::stdout().lock();
    match &args.mode {
        Mode::Smooth(parameters) => {
            let smoothed = smooth(&series, parameters.window)?;
            output::write_series(stdout, args.output_format, &smoothed)
                .context("Cannot write smoothed series")?;
        }
        Mode::Detect(parameters) => {
            let thresholds = parameters.thresholds()?;
            let events = smooth_and_detect(&series, parameters.smoothing_window, &thresholds)?;
            let longest = events.iter().map(EventRecord::duration).max();
            info!(num_events = events.len(), longest, "Events detected");
            output::write_events(stdout, args.output_format, &events)
                .context("Cannot write events")?;
        }
    }
    Ok(())
}
