//! Data export
//!
//! CSV export of chromatogram traces and raw detection events.

mod csv;

pub use csv::{export_chromatogram_csv, export_detector_csv, CsvConfig, CsvMetadata};
