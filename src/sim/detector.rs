//! Detection log and chromatogram aggregation
//!
//! The [`DetectorLog`] maps each analyte class to the ordered sequence of
//! detection timestamps recorded during the run (append-only, cleared on
//! injection or reset).
//!
//! The [`Chromatogram`] is rebuilt from the log on every tick — a full
//! recompute, not an incremental update. Recomputation avoids drift from
//! partial updates at the cost of `O(bins × window)` work per tick, which is
//! acceptable because bin counts stay small (< 10³) for a tick-driven
//! visualization.
//!
//! Aggregation pipeline: merge all per-class times → bin by truncation into
//! fixed 1-unit bins → symmetric moving average (half-window 3, clipped at
//! both range boundaries, divisor = bins actually summed) → ordered
//! `(bin_center, intensity)` pairs.

use crate::models::analyte::AnalyteClass;
use nalgebra::DVector;

/// Width of one chromatogram time bin.
pub const BIN_WIDTH: f64 = 1.0;

/// Bins on each side of the center included in the moving average.
pub const SMOOTHING_HALF_WINDOW: usize = 3;

// =================================================================================================
// Detector Log
// =================================================================================================

/// Per-class detection timestamps, append-only during a run.
#[derive(Debug, Clone, Default)]
pub struct DetectorLog {
    times: [Vec<f64>; AnalyteClass::COUNT],
}

impl DetectorLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one detection event.
    pub fn record(&mut self, class: AnalyteClass, time: f64) {
        self.times[class.index()].push(time);
    }

    /// Detection times for one class, in recording order.
    pub fn times(&self, class: AnalyteClass) -> &[f64] {
        &self.times[class.index()]
    }

    /// Total number of detection events across all classes.
    pub fn total(&self) -> usize {
        self.times.iter().map(Vec::len).sum()
    }

    /// True when no detection has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.times.iter().all(Vec::is_empty)
    }

    /// Clear all recorded events (injection / reset).
    pub fn clear(&mut self) {
        for times in &mut self.times {
            times.clear();
        }
    }

    /// Iterate over all events as `(class, time)` pairs, class-major.
    pub fn iter(&self) -> impl Iterator<Item = (AnalyteClass, f64)> + '_ {
        AnalyteClass::ALL
            .into_iter()
            .flat_map(move |class| self.times(class).iter().map(move |&t| (class, t)))
    }
}

// =================================================================================================
// Chromatogram
// =================================================================================================

/// Time-binned, smoothed intensity trace built from the detector log.
#[derive(Debug, Clone, Default)]
pub struct Chromatogram {
    points: Vec<(f64, f64)>,
}

impl Chromatogram {
    /// Create an empty chromatogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered `(bin_center_time, smoothed_intensity)` pairs.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest smoothed intensity, 0.0 when empty.
    pub fn max_intensity(&self) -> f64 {
        self.points
            .iter()
            .map(|&(_, intensity)| intensity)
            .fold(0.0, f64::max)
    }

    /// Last bin-center time, 0.0 when empty.
    pub fn max_time(&self) -> f64 {
        self.points.last().map_or(0.0, |&(time, _)| time)
    }

    /// Discard all points (reset).
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Rebuild the trace from scratch.
    ///
    /// `horizon` is the maximum elapsed time across the particle population
    /// (detected or not); it determines how many bins the trace spans. An
    /// empty log yields an empty trace — no arithmetic on empty aggregates.
    pub fn rebuild(&mut self, log: &DetectorLog, horizon: f64) {
        self.points.clear();
        if log.is_empty() {
            return;
        }

        let histogram = bin_events(log, horizon);
        let smoothed = moving_average(&histogram, SMOOTHING_HALF_WINDOW);

        self.points = smoothed
            .into_iter()
            .enumerate()
            .map(|(bin, intensity)| ((bin as f64 + 0.5) * BIN_WIDTH, intensity))
            .collect();
    }
}

/// Bin all recorded detection times (classes merged) by truncation.
///
/// The trace spans `0 ..= floor(horizon + 1)` bins so the most recent events
/// always fall inside it.
fn bin_events(log: &DetectorLog, horizon: f64) -> DVector<f64> {
    let max_time = horizon.max(0.0) + BIN_WIDTH;
    let n_bins = (max_time / BIN_WIDTH) as usize + 1;
    let mut histogram = DVector::zeros(n_bins);

    for (_, time) in log.iter() {
        let bin = (time / BIN_WIDTH) as usize;
        if bin < n_bins {
            histogram[bin] += 1.0;
        }
    }

    histogram
}

/// Symmetric moving average with boundary clipping.
///
/// For each bin the window `[bin − half, bin + half]` is clipped to the
/// valid range and the divisor is the number of bins actually summed, so
/// edge bins are not under-weighted:
///
/// ```rust
/// use gcms_rs::sim::detector::moving_average;
/// use nalgebra::DVector;
///
/// let raw = DVector::from_vec(vec![2.0, 1.0, 0.0, 3.0]);
/// let smoothed = moving_average(&raw, 3);
/// assert_eq!(smoothed[0], 1.5); // (2+1+0+3) / 4
/// ```
pub fn moving_average(histogram: &DVector<f64>, half_window: usize) -> Vec<f64> {
    let n = histogram.len();
    (0..n)
        .map(|bin| {
            let start = bin.saturating_sub(half_window);
            let end = (bin + half_window).min(n - 1);
            let sum: f64 = (start..=end).map(|i| histogram[i]).sum();
            sum / (end - start + 1) as f64
        })
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================
