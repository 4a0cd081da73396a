use prob_events_detection::{EventRecord, Real};
use std::io::Write;

use crate::parameters::OutputFormat;

pub(crate) fn write_series<W: Write>(
    mut writer: W,
    format: OutputFormat,
    series: &[Real],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, series)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            for value in series {
                writeln!(writer, "{value}")?;
            }
        }
    }
    Ok(())
}

pub(crate) fn write_events<W: Write>(
    mut writer: W,
    format: OutputFormat,
    events: &[EventRecord],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, events)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            writeln!(writer, "{}", EventRecord::CSV_HEADER)?;
            for event in events {
                writeln!(writer, "{event}")?;
            }
        }
    }
    Ok(())
}
