//! Result visualization
//!
//! Static chromatogram plots for headless use — the interactive renderer is
//! an external collaborator, but exported traces are useful for demos,
//! regression comparisons and documentation.

mod chromatogram;
mod config;

pub use chromatogram::{plot_chromatogram, plot_chromatogram_comparison};
pub use config::PlotConfig;
