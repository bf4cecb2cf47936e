//! Chromatogram plotting
//!
//! Renders the simulation's smoothed intensity trace to a file. The backend
//! is chosen from the output path's extension: `.svg` produces a vector
//! image, anything else a bitmap.
//!
//! # Available functions
//!
//! - [`plot_chromatogram`]            — single trace: intensity vs time
//! - [`plot_chromatogram_comparison`] — overlay several runs on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use gcms_rs::output::{plot_chromatogram, PlotConfig};
//!
//! let config = PlotConfig::chromatogram("He 30 psi, 60-280 C");
//! plot_chromatogram(sim.chromatogram(), "run.png", Some(&config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::sim::detector::Chromatogram;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a single chromatogram (smoothed intensity vs retention time).
///
/// # Arguments
///
/// * `chromatogram` — trace to plot
/// * `output_path`  — output file path (`.svg` → vector, else bitmap)
/// * `config`       — optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the chromatogram is empty or the backend cannot write
/// to `output_path`.
pub fn plot_chromatogram(
    chromatogram: &Chromatogram,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if chromatogram.is_empty() {
        return Err("Cannot plot an empty chromatogram".into());
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let max_time = chromatogram.max_time().max(1.0);
    let max_intensity = chromatogram.max_intensity().max(1e-10);

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_single_impl(backend, chromatogram, config, max_time, max_intensity)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_single_impl(backend, chromatogram, config, max_time, max_intensity)
        }
    }
}

/// Plot several chromatograms overlaid for comparison.
///
/// Useful for comparing carrier gases, pressures or temperature programs on
/// the same axes. Each dataset is drawn with a distinct color from
/// `config.series_colors` or the built-in palette.
///
/// # Arguments
///
/// * `datasets`    — `(label, chromatogram)` pairs
/// * `output_path` — output file path (`.svg` or bitmap)
/// * `config`      — optional plot configuration
///
/// # Errors
///
/// Returns `Err` when `datasets` is empty, every trace is empty, or the
/// backend fails.
pub fn plot_chromatogram_comparison(
    datasets: Vec<(&str, &Chromatogram)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let max_time = datasets
        .iter()
        .map(|(_, c)| c.max_time())
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let max_intensity = datasets
        .iter()
        .map(|(_, c)| c.max_intensity())
        .fold(0.0_f64, f64::max)
        .max(1e-10);

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config, max_time, max_intensity)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config, max_time, max_intensity)
        }
    }
}

// =================================================================================================
// Private Implementations
// =================================================================================================

fn extension(path: &str) -> &str {
    std::path::Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
}

fn plot_single_impl<DB: DrawingBackend>(
    backend: DB,
    chromatogram: &Chromatogram,
    config: &PlotConfig,
    max_time: f64,
    max_intensity: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_intensity * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            chromatogram.points().iter().copied(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Intensity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &Chromatogram)],
    config: &PlotConfig,
    max_time: f64,
    max_intensity: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_intensity * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (index, (label, chromatogram)) in datasets.iter().enumerate() {
        let color = config.series_color(index);

        chart
            .draw_series(LineSeries::new(
                chromatogram.points().iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
