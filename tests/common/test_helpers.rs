//! Helper functions for integration tests

use gcms_rs::models::{AnalyteClass, DistributionMode};
use gcms_rs::sim::{Simulation, SimulationConfig};

/// Reference scenario configuration: 800 particles uniformly split across
/// the 8 classes, 60 → 280 °C at 10 °C/min with one-minute holds.
pub fn reference_config() -> SimulationConfig {
    SimulationConfig {
        particle_count: 800,
        distribution: DistributionMode::Uniform,
        start_temp: 60.0,
        end_temp: 280.0,
        ramp_rate: 10.0,
        initial_hold: 1.0,
        final_hold: 1.0,
        ..Default::default()
    }
}

/// Build a seeded simulation, inject, and run `total_time` at the given dt.
pub fn run_scenario(config: SimulationConfig, seed: u64, total_time: f64, dt: f64) -> Simulation {
    let mut sim = Simulation::with_seed(config, seed).expect("valid configuration");
    sim.inject().expect("injection succeeds");
    let ticks = (total_time / dt).round() as usize;
    for _ in 0..ticks {
        sim.tick(dt);
    }
    sim
}

/// Mean detection time for one class, `None` when nothing was detected.
pub fn mean_detection_time(sim: &Simulation, class: AnalyteClass) -> Option<f64> {
    let times = sim.detector().times(class);
    if times.is_empty() {
        None
    } else {
        Some(times.iter().sum::<f64>() / times.len() as f64)
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
