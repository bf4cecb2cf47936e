//! CSV export of simulation results
//!
//! Exports the chromatogram trace and the raw detection events to CSV,
//! readable by Excel, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export straight from [`Chromatogram`] /
//!   [`DetectorLog`]
//! - **Metadata support**: optional `#`-prefixed header with run parameters
//! - **Customizable**: delimiter and precision options
//! - **Validation**: rejects empty data and non-finite values
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use gcms_rs::output::export::{export_chromatogram_csv, CsvConfig, CsvMetadata};
//!
//! export_chromatogram_csv(sim.chromatogram(), "trace.csv", None)?;
//! ```
//!
//! **Output** (`trace.csv`):
//! ```csv
//! Time,Intensity
//! 0.500000,0.000000
//! 1.500000,0.250000
//! 2.500000,1.500000
//! ```

use crate::error::{Error, Result};
use crate::sim::detector::{Chromatogram, DetectorLog};
use std::fs::File;
use std::io::Write;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Optional run metadata written as `#` comment lines before the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Carrier gas symbol, e.g. "He".
    pub carrier_gas: Option<String>,
    /// Number of injected particles.
    pub particle_count: Option<usize>,
    /// Temperature program summary, e.g. "60-280 C at 10 C/min".
    pub temperature_program: Option<String>,
    /// Elapsed simulation time at export.
    pub elapsed: Option<f64>,
}

/// Configuration for CSV export.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column separator (default: ',').
    pub delimiter: char,
    /// Number of decimal places (default: 6).
    pub precision: usize,
    /// Write metadata comment lines before the header.
    pub include_metadata: bool,
    /// Metadata to include when `include_metadata` is set.
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Export the chromatogram trace as `Time,Intensity` rows.
///
/// # Errors
///
/// Fails when the chromatogram is empty, when any value is non-finite, or
/// when the file cannot be written.
pub fn export_chromatogram_csv(
    chromatogram: &Chromatogram,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    let points = chromatogram.points();
    if points.is_empty() {
        return Err(Error::EmptyData("chromatogram has no points".into()));
    }
    for &(time, intensity) in points {
        if !time.is_finite() || !intensity.is_finite() {
            return Err(Error::NonFinite(format!(
                "chromatogram point ({time}, {intensity})"
            )));
        }
    }

    let mut file = File::create(output_path)?;
    write_metadata(&mut file, config)?;

    writeln!(file, "Time{}Intensity", config.delimiter)?;
    for &(time, intensity) in points {
        writeln!(
            file,
            "{:.prec$}{}{:.prec$}",
            time,
            config.delimiter,
            intensity,
            prec = config.precision
        )?;
    }

    Ok(())
}

/// Export raw detection events as `Class,RetentionTime` rows, sorted by
/// retention time.
///
/// # Errors
///
/// Fails when the log holds no events or the file cannot be written.
pub fn export_detector_csv(
    log: &DetectorLog,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if log.is_empty() {
        return Err(Error::EmptyData("detector log has no events".into()));
    }

    let mut events: Vec<_> = log.iter().collect();
    events.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut file = File::create(output_path)?;
    write_metadata(&mut file, config)?;

    writeln!(file, "Class{}RetentionTime", config.delimiter)?;
    for (class, time) in events {
        writeln!(
            file,
            "{}{}{:.prec$}",
            class.label(),
            config.delimiter,
            time,
            prec = config.precision
        )?;
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn write_metadata(file: &mut File, config: &CsvConfig) -> Result<()> {
    if !config.include_metadata {
        return Ok(());
    }
    let Some(metadata) = &config.metadata else {
        return Ok(());
    };

    writeln!(file, "# GC/MS Simulation Data")?;
    if let Some(gas) = &metadata.carrier_gas {
        writeln!(file, "# Carrier Gas: {gas}")?;
    }
    if let Some(count) = metadata.particle_count {
        writeln!(file, "# Particles: {count}")?;
    }
    if let Some(program) = &metadata.temperature_program {
        writeln!(file, "# Temperature Program: {program}")?;
    }
    if let Some(elapsed) = metadata.elapsed {
        writeln!(file, "# Elapsed: {elapsed}")?;
    }
    writeln!(file, "#")?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalyteClass;

    fn sample_chromatogram() -> Chromatogram {
        let mut log = DetectorLog::new();
        log.record(AnalyteClass::Solvent, 5.0);
        log.record(AnalyteClass::Nonpolar1, 12.0);
        let mut chromatogram = Chromatogram::new();
        chromatogram.rebuild(&log, 20.0);
        chromatogram
    }

    #[test]
    fn test_export_chromatogram_basic() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");
        export_chromatogram_csv(&sample_chromatogram(), path.to_str().unwrap(), None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Time,Intensity"));
        assert!(content.lines().count() > 10);
    }

    #[test]
    fn test_export_empty_chromatogram_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");
        let err = export_chromatogram_csv(&Chromatogram::new(), path.to_str().unwrap(), None);
        assert!(err.is_err());
    }

    #[test]
    fn test_export_with_metadata() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");

        let config = CsvConfig {
            include_metadata: true,
            metadata: Some(CsvMetadata {
                carrier_gas: Some("He".into()),
                particle_count: Some(500),
                temperature_program: Some("60-280 C at 10 C/min".into()),
                elapsed: Some(120.0),
            }),
            ..Default::default()
        };

        export_chromatogram_csv(&sample_chromatogram(), path.to_str().unwrap(), Some(&config))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Carrier Gas: He"));
        assert!(content.contains("# Particles: 500"));
        assert!(content.contains("Time,Intensity"));
    }

    #[test]
    fn test_export_custom_delimiter_and_precision() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");

        let config = CsvConfig {
            delimiter: ';',
            precision: 2,
            ..Default::default()
        };
        export_chromatogram_csv(&sample_chromatogram(), path.to_str().unwrap(), Some(&config))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Time;Intensity"));
        assert!(content.contains("0.50;"));
    }

    #[test]
    fn test_export_detector_sorted_by_time() {
        let mut log = DetectorLog::new();
        log.record(AnalyteClass::Polar2, 42.5);
        log.record(AnalyteClass::Solvent, 5.1);
        log.record(AnalyteClass::Nonpolar2, 18.0);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");
        export_detector_csv(&log, path.to_str().unwrap(), None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Class,RetentionTime");
        assert!(lines[1].starts_with("solvent,"));
        assert!(lines[2].starts_with("nonpolar2,"));
        assert!(lines[3].starts_with("polar2,"));
    }

    #[test]
    fn test_export_empty_detector_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("csv");
        assert!(export_detector_csv(&DetectorLog::new(), path.to_str().unwrap(), None).is_err());
    }
}
