//! Integration tests: full simulation runs
//!
//! These tests drive the complete pipeline — injection, temperature
//! program, particle kinetics, detection and chromatogram aggregation —
//! through the public API and assert the behavioral contracts that hold
//! across the whole system.

use gcms_rs::models::AnalyteClass;
use gcms_rs::physics::CarrierGas;
use gcms_rs::sim::Simulation;

mod common;
use common::{mean_detection_time, reference_config, run_scenario};

// =================================================================================================
// Reference Scenario
// =================================================================================================

/// 800 particles, 8 classes uniform, 60→280 °C at 10 °C/min, 1 min holds,
/// 120 time-units at dt = 0.5.
fn reference_run() -> Simulation {
    run_scenario(reference_config(), 20_260_806, 120.0, 0.5)
}

#[test]
fn test_reference_scenario_detects_low_retention_classes() {
    let sim = reference_run();

    // Every particle with an effective retention factor below the threshold
    // must have eluted within the run.
    let threshold = 2.0;
    for particle in sim.particles() {
        if particle.retention_factor < threshold {
            assert!(
                particle.detected,
                "{} particle with RF {} not detected",
                particle.class, particle.retention_factor
            );
        }
    }
}

#[test]
fn test_reference_scenario_detects_all_default_classes() {
    let sim = reference_run();
    for class in AnalyteClass::ALL {
        assert!(
            !sim.detector().times(class).is_empty(),
            "{} produced no detections",
            class
        );
    }
}

#[test]
fn test_detection_times_increase_with_retention() {
    let sim = reference_run();
    let config = reference_config();

    // Order classes by nominal retention factor and require strictly
    // increasing mean detection times along that order.
    let mut classes = AnalyteClass::ALL;
    classes.sort_by(|a, b| {
        config
            .nominal_retention(*a)
            .total_cmp(&config.nominal_retention(*b))
    });

    let means: Vec<(AnalyteClass, f64)> = classes
        .iter()
        .map(|&class| {
            (
                class,
                mean_detection_time(&sim, class).expect("class detected"),
            )
        })
        .collect();

    for pair in means.windows(2) {
        let (class_a, mean_a) = pair[0];
        let (class_b, mean_b) = pair[1];
        assert!(
            mean_a < mean_b,
            "{} (mean {:.2}) should elute before {} (mean {:.2})",
            class_a,
            mean_a,
            class_b,
            mean_b
        );
    }
}

#[test]
fn test_detected_times_within_run_horizon() {
    let sim = reference_run();
    for class in AnalyteClass::ALL {
        for &t in sim.detector().times(class) {
            assert!(t > 0.0 && t <= 120.0, "{}: time {} out of range", class, t);
        }
    }
}

// =================================================================================================
// Chromatogram Properties
// =================================================================================================

#[test]
fn test_chromatogram_is_well_formed() {
    let sim = reference_run();
    let points = sim.chromatogram().points();

    assert!(!points.is_empty());
    assert!(points.windows(2).all(|w| w[0].0 < w[1].0), "times sorted");
    for &(time, intensity) in points {
        assert!(time.is_finite() && intensity.is_finite());
        assert!(intensity >= 0.0);
    }
    assert!(sim.chromatogram().max_intensity() > 0.0);
}

#[test]
fn test_chromatogram_mass_matches_detections() {
    // Away from the trace edges the moving average conserves counts, so the
    // summed intensity approximates the total number of detections.
    let sim = reference_run();
    let total: f64 = sim.chromatogram().points().iter().map(|&(_, i)| i).sum();
    let detections = sim.detector().total() as f64;

    assert!(
        (total - detections).abs() / detections < 0.05,
        "smoothed mass {} vs detections {}",
        total,
        detections
    );
}

// =================================================================================================
// Reset Semantics
// =================================================================================================

#[test]
fn test_reset_then_inject_yields_clean_state() {
    let mut sim = reference_run();
    assert!(sim.detector().total() > 0);

    sim.reset();
    assert!(sim.particles().is_empty());
    assert!(sim.chromatogram().is_empty());
    assert!(!sim.is_running());

    sim.inject().unwrap();
    assert_eq!(sim.particles().len(), 800);
    assert!(sim.detector().is_empty());
    assert!(sim.chromatogram().is_empty());
    assert_eq!(sim.elapsed(), 0.0);
}

#[test]
fn test_double_inject_identical_to_single() {
    let mut sim = Simulation::with_seed(reference_config(), 7).unwrap();
    sim.inject().unwrap();
    sim.inject().unwrap();

    assert_eq!(sim.particles().len(), 800);
    assert!(sim.detector().is_empty());
    assert!(sim.chromatogram().is_empty());
    assert_eq!(sim.elapsed(), 0.0);
    assert!(sim.is_running());
}

// =================================================================================================
// Cross-Configuration Behavior
// =================================================================================================

#[test]
fn test_shorter_column_elutes_faster() {
    let mut short_config = reference_config();
    short_config.column_length_factor = 0.5;

    let long = run_scenario(reference_config(), 5, 120.0, 0.5);
    let short = run_scenario(short_config, 5, 120.0, 0.5);

    let class = AnalyteClass::Semipolar1;
    let long_mean = mean_detection_time(&long, class).unwrap();
    let short_mean = mean_detection_time(&short, class).unwrap();
    assert!(
        short_mean < long_mean,
        "short column mean {:.2} should beat {:.2}",
        short_mean,
        long_mean
    );
}

#[test]
fn test_higher_pressure_elutes_faster() {
    let mut fast_config = reference_config();
    fast_config.carrier_pressure = 60.0;

    let slow = run_scenario(reference_config(), 6, 120.0, 0.5);
    let fast = run_scenario(fast_config, 6, 120.0, 0.5);

    let class = AnalyteClass::Polar2;
    let slow_mean = mean_detection_time(&slow, class).unwrap();
    let fast_mean = mean_detection_time(&fast, class).unwrap();
    assert!(fast_mean < slow_mean);
}

#[test]
fn test_nitrogen_carrier_slower_than_helium() {
    let mut n2_config = reference_config();
    n2_config.carrier_gas = CarrierGas::Nitrogen;

    let he = run_scenario(reference_config(), 8, 120.0, 0.5);
    let n2 = run_scenario(n2_config, 8, 120.0, 0.5);

    // N2 is more viscous → lower base velocity → later elution
    let class = AnalyteClass::Nonpolar2;
    let he_mean = mean_detection_time(&he, class).unwrap();
    let n2_mean = mean_detection_time(&n2, class).unwrap();
    assert!(he_mean < n2_mean);
}

#[test]
fn test_random_mode_preserves_count() {
    let mut config = reference_config();
    config.distribution = gcms_rs::models::DistributionMode::Random;
    let sim = run_scenario(config, 9, 60.0, 0.5);
    assert_eq!(sim.particles().len(), 800);
}
