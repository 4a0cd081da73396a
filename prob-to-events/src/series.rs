use anyhow::Context;
use prob_events_detection::Real;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Loads a probability series from the given file, or from stdin if no path
/// is given.
pub(crate) fn load_series(path: Option<&Path>) -> anyhow::Result<Vec<Real>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open input file {}", path.display()))?;
            read_series(BufReader::new(file))
                .with_context(|| format!("Cannot read series from {}", path.display()))
        }
        None => read_series(io::stdin().lock()).context("Cannot read series from stdin"),
    }
}

/// The input must be a single JSON array of numbers.
pub(crate) fn read_series<R: Read>(reader: R) -> anyhow::Result<Vec<Real>> {
    let series: Vec<Real> =
        serde_json::from_reader(reader).context("Input should be a JSON array of numbers")?;
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_array() {
        let series = read_series("[0, 0.25, 1e-1, 1]".as_bytes()).unwrap();
        assert_eq!(series, vec![0.0, 0.25, 0.1, 1.0]);
    }

    #[test]
    fn read_empty_array() {
        assert!(read_series("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn reject_non_numeric() {
        assert!(read_series(r#"[0.1, "high"]"#.as_bytes()).is_err());
        assert!(read_series(r#"{"series": [0.1]}"#.as_bytes()).is_err());
        assert!(read_series("".as_bytes()).is_err());
    }

    #[test]
    fn missing_file() {
        let err = load_series(Some(Path::new("/nonexistent/series.json"))).unwrap_err();
        assert!(err.to_string().contains("Cannot open input file"));
    }
}
