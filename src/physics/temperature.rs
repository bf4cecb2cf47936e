//! Oven temperature program and retention temperature correction
//!
//! Two pieces of temperature physics live here:
//!
//! 1. The **temperature program**: the hold → ramp → hold schedule the column
//!    oven follows over a run. It is a pure function of elapsed time and the
//!    configured scalars; no state is kept beyond the simulation clock.
//!
//! 2. The **van't Hoff factor**: an exponential temperature correction
//!    applied to every particle's retention factor. The result is clamped to
//!    `[0.5, 2.0]` — a stability guard against runaway retention times at
//!    temperature extremes, not a tuning knob.
//!
//! # Example
//!
//! ```rust
//! use gcms_rs::physics::{temp_factor, TemperatureProgram};
//!
//! let program = TemperatureProgram {
//!     start_temp: 60.0,
//!     end_temp: 280.0,
//!     ramp_rate: 10.0,
//!     initial_hold_min: 1.0,
//!     final_hold_min: 1.0,
//! };
//!
//! // Still inside the initial hold at t = 30 s
//! let oven = program.evaluate(30.0);
//! assert_eq!(oven.temperature, 60.0);
//! assert!(!oven.initial_hold_complete);
//!
//! // The factor is 1.0 at the reference temperature
//! assert_eq!(temp_factor(60.0, 60.0), 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Universal gas constant \[J/(mol·K)\].
const GAS_CONSTANT: f64 = 8.314;

/// Reduced enthalpy change \[J/mol\], dampened for moderate temperature effects.
const DEFAULT_DELTA_H: f64 = 20_000.0;

/// Clamp bounds for the van't Hoff factor. Must be preserved exactly.
const TEMP_FACTOR_MIN: f64 = 0.5;
const TEMP_FACTOR_MAX: f64 = 2.0;

/// °C → K offset.
const CELSIUS_TO_KELVIN: f64 = 273.15;

// =================================================================================================
// Temperature Program
// =================================================================================================

/// Configured hold → ramp → hold oven schedule.
///
/// Temperatures in °C, ramp rate in °C/min, hold durations in minutes.
/// Elapsed time is in seconds. The schedule is monotone non-decreasing for
/// `ramp_rate >= 0` and `end_temp >= start_temp` (both guaranteed by
/// configuration validation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProgram {
    pub start_temp: f64,
    pub end_temp: f64,
    pub ramp_rate: f64,
    pub initial_hold_min: f64,
    pub final_hold_min: f64,
}

/// Oven state at one instant, derived from the program and the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvenState {
    /// Current oven temperature \[°C\].
    pub temperature: f64,
    /// The initial hold has elapsed and ramping has begun.
    pub initial_hold_complete: bool,
    /// The temperature has reached `end_temp` and is pinned there.
    pub final_hold_started: bool,
}

impl TemperatureProgram {
    /// Evaluate the program at elapsed time `t` (seconds).
    ///
    /// Transitions are one-directional: once past the initial hold the
    /// program never re-enters it, and once `final_hold_started` is true it
    /// stays true for the rest of the run.
    pub fn evaluate(&self, t: f64) -> OvenState {
        if t < self.initial_hold_min * 60.0 {
            return OvenState {
                temperature: self.start_temp,
                initial_hold_complete: false,
                final_hold_started: false,
            };
        }

        let ramp_time = t - self.initial_hold_min * 60.0;
        let mut temperature = self.start_temp + self.ramp_rate * ramp_time / 60.0;
        let final_hold_started = temperature >= self.end_temp;
        if final_hold_started {
            temperature = self.end_temp;
        }

        OvenState {
            temperature,
            initial_hold_complete: true,
            final_hold_started,
        }
    }
}

// =================================================================================================
// Retention Model (van't Hoff)
// =================================================================================================

/// Van't Hoff temperature-correction factor for retention.
///
/// Both temperatures are in °C and converted to Kelvin internally:
///
/// ```text
/// f = exp( (ΔH / R) · (1/T_ref − 1/T) )
/// ```
///
/// The result is clamped to `[0.5, 2.0]`. Hotter than the reference → factor
/// below 1 (faster elution), colder → above 1.
pub fn temp_factor(current_temp: f64, ref_temp: f64) -> f64 {
    let t = current_temp + CELSIUS_TO_KELVIN;
    let t_ref = ref_temp + CELSIUS_TO_KELVIN;

    let factor = ((DEFAULT_DELTA_H / GAS_CONSTANT) * (1.0 / t_ref - 1.0 / t)).exp();

    factor.clamp(TEMP_FACTOR_MIN, TEMP_FACTOR_MAX)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> TemperatureProgram {
        TemperatureProgram {
            start_temp: 60.0,
            end_temp: 280.0,
            ramp_rate: 10.0,
            initial_hold_min: 1.0,
            final_hold_min: 1.0,
        }
    }

    // ====== Temperature program ======

    #[test]
    fn test_initial_hold() {
        let oven = program().evaluate(59.9);
        assert_eq!(oven.temperature, 60.0);
        assert!(!oven.initial_hold_complete);
        assert!(!oven.final_hold_started);
    }

    #[test]
    fn test_ramp_value() {
        // 6 minutes into the ramp: 60 + 10 °C/min · 6 min = 120 °C
        let oven = program().evaluate(60.0 + 360.0);
        assert!((oven.temperature - 120.0).abs() < 1e-10);
        assert!(oven.initial_hold_complete);
        assert!(!oven.final_hold_started);
    }

    #[test]
    fn test_ramp_starts_at_hold_boundary() {
        let oven = program().evaluate(60.0);
        assert!((oven.temperature - 60.0).abs() < 1e-10);
        assert!(oven.initial_hold_complete);
    }

    #[test]
    fn test_final_hold_pins_at_end_temp() {
        // Ramp spans (280-60)/10 = 22 min; far beyond that the oven is pinned
        let oven = program().evaluate(60.0 + 30.0 * 60.0);
        assert_eq!(oven.temperature, 280.0);
        assert!(oven.final_hold_started);
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let p = program();
        let mut previous = f64::NEG_INFINITY;
        let mut final_latched = false;
        for step in 0..4000 {
            let oven = p.evaluate(step as f64);
            assert!(
                oven.temperature >= previous,
                "temperature decreased at t={}",
                step
            );
            if final_latched {
                assert!(oven.final_hold_started, "final hold un-latched at t={}", step);
            }
            final_latched = oven.final_hold_started;
            previous = oven.temperature;
        }
    }

    #[test]
    fn test_zero_hold_ramps_immediately() {
        let p = TemperatureProgram {
            initial_hold_min: 0.0,
            ..program()
        };
        let oven = p.evaluate(60.0);
        // One minute of ramping already done
        assert!((oven.temperature - 70.0).abs() < 1e-10);
    }

    // ====== Van't Hoff factor ======

    #[test]
    fn test_factor_is_one_at_reference() {
        assert_eq!(temp_factor(60.0, 60.0), 1.0);
        assert_eq!(temp_factor(150.0, 150.0), 1.0);
    }

    #[test]
    fn test_factor_clamped_over_grid() {
        for current in (-50..=400).step_by(10) {
            for reference in (0..=300).step_by(25) {
                let f = temp_factor(current as f64, reference as f64);
                assert!(
                    (0.5..=2.0).contains(&f),
                    "factor {} out of bounds for T={}, ref={}",
                    f,
                    current,
                    reference
                );
                assert!(f.is_finite());
            }
        }
    }

    #[test]
    fn test_factor_increases_with_temperature() {
        // ΔH > 0 and T > T_ref give a positive exponent
        let cold = temp_factor(60.0, 60.0);
        let hot = temp_factor(120.0, 60.0);
        assert!(hot > cold);
    }

    #[test]
    fn test_extreme_temperatures_hit_clamp() {
        assert_eq!(temp_factor(400.0, 0.0), 2.0);
        assert_eq!(temp_factor(-100.0, 300.0), 0.5);
    }
}
