//! Result output: visualization and export
//!
//! The live renderer (particles, column, detector, widgets) is an external
//! collaborator and out of scope here. This module covers the file-based
//! output surface instead:
//!
//! - [`visualization`]: chromatogram plots via `plotters` (PNG/SVG)
//! - [`export`]: CSV export of traces and detection events

pub mod export;
pub mod visualization;

pub use export::{export_chromatogram_csv, export_detector_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_chromatogram, plot_chromatogram_comparison, PlotConfig};
