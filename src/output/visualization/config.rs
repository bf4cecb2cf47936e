//! Plot configuration shared by the visualization functions

use plotters::prelude::*;

/// Configuration for customizing chromatogram plots.
///
/// # Example
///
/// ```rust,ignore
/// use gcms_rs::output::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::chromatogram("Default Separation");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024).
    pub width: u32,

    /// Image height in pixels (default: 768).
    pub height: u32,

    /// Plot title (default: "Chromatogram").
    pub title: String,

    /// X-axis label (default: "Time").
    pub xlabel: String,

    /// Y-axis label (default: "Intensity").
    pub ylabel: String,

    /// Line color for single-trace plots (default: RED).
    pub line_color: RGBColor,

    /// Optional per-series colors for comparison plots.
    ///
    /// If None, falls back to the built-in palette.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE).
    pub background: RGBColor,

    /// Line width in pixels (default: 2).
    pub line_width: u32,

    /// Show grid lines (default: true).
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Chromatogram".to_string(),
            xlabel: "Time".to_string(),
            ylabel: "Intensity".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Built-in fallback palette for comparison plots.
const DEFAULT_PALETTE: [RGBColor; 8] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    CYAN,
    RGBColor(255, 165, 0), // orange
    RGBColor(128, 0, 128), // purple
    RGBColor(128, 128, 0), // olive
];

impl PlotConfig {
    /// Config with a custom title; `None` keeps the default.
    pub fn chromatogram(title: impl Into<Option<&'static str>>) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into() {
            config.title = title.to_string();
        }
        config
    }

    /// Config with explicit per-series colors for comparison plots.
    pub fn with_series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Color for series `index`, from the custom list or the palette.
    pub fn series_color(&self, index: usize) -> RGBColor {
        match &self.series_colors {
            Some(colors) if !colors.is_empty() => colors[index % colors.len()],
            _ => DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()],
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
