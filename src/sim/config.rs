//! Simulation configuration
//!
//! A single immutable value object holding every user-adjustable scalar:
//! per-class retention factors, particle count, column length factor,
//! temperature program, carrier pressure and gas, split ratio and the
//! injection distribution mode.
//!
//! The configuration is owned by the external collaborator (the UI); the
//! core only ever reads a snapshot of it — once per injection, and once per
//! tick for the column-geometry and temperature-program inputs. Nothing in
//! the core mutates a configuration.
//!
//! # Example
//!
//! ```rust
//! use gcms_rs::models::AnalyteClass;
//! use gcms_rs::sim::SimulationConfig;
//!
//! let mut config = SimulationConfig::default();
//! config.particle_count = 800;
//! config.set_retention(AnalyteClass::Solvent, 0.2);
//! config.validate().unwrap();
//! ```

use crate::error::{Error, Result};
use crate::models::analyte::AnalyteClass;
use crate::models::injection::DistributionMode;
use crate::physics::{CarrierGas, TemperatureProgram};
use serde::{Deserialize, Serialize};

// Column geometry in visualization units.
const BASE_COLUMN_START_X: f64 = 300.0;
const BASE_COLUMN_END_X: f64 = 800.0;
const COLUMN_Y: f64 = 700.0;

/// Width of the detector window at the column exit.
pub const DETECTOR_WIDTH: f64 = 20.0;

/// Column geometry derived from the current length factor.
///
/// Recomputed from configuration every tick, so mid-run length changes take
/// effect immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    /// Column entry x.
    pub start_x: f64,
    /// Column exit x; the detector spans `[end_x, end_x + DETECTOR_WIDTH]`.
    pub end_x: f64,
    /// Column axis y.
    pub y: f64,
}

impl ColumnGeometry {
    /// Geometry for a given column length factor.
    pub fn from_length_factor(length_factor: f64) -> Self {
        Self {
            start_x: BASE_COLUMN_START_X * length_factor,
            end_x: BASE_COLUMN_END_X * length_factor,
            y: COLUMN_Y,
        }
    }

    /// True when `x` lies inside the detector window.
    pub fn in_detector(&self, x: f64) -> bool {
        x >= self.end_x && x <= self.end_x + DETECTOR_WIDTH
    }
}

/// The full set of user-adjustable simulation parameters.
///
/// `Default` reproduces the reference instrument settings: 500 particles,
/// helium carrier at 30 psi, split 50, 60 → 280 °C at 10 °C/min with one
/// minute holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of particles per injection.
    pub particle_count: usize,
    /// Nominal per-class retention factors, indexed by
    /// [`AnalyteClass::index`].
    pub retention_factors: [f64; AnalyteClass::COUNT],
    /// Relative column length (1.0 = nominal).
    pub column_length_factor: f64,
    /// Oven start temperature \[°C\].
    pub start_temp: f64,
    /// Oven end temperature \[°C\].
    pub end_temp: f64,
    /// Ramp rate \[°C/min\].
    pub ramp_rate: f64,
    /// Carrier gas inlet pressure \[psi\].
    pub carrier_pressure: f64,
    /// Injector split ratio.
    pub split_ratio: f64,
    /// Initial temperature hold \[min\].
    pub initial_hold: f64,
    /// Final temperature hold \[min\].
    pub final_hold: f64,
    /// Selected carrier gas.
    pub carrier_gas: CarrierGas,
    /// Uniform vs. random class distribution at injection.
    pub distribution: DistributionMode,
    /// Derive flow from gas properties and pressure; when false a fixed
    /// flow is used and pressure/gas settings have no effect.
    pub gas_flow: bool,
    /// Apply van Deemter plate-height damping to particle motion.
    pub van_deemter: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 500,
            retention_factors: [0.1, 0.5, 0.7, 1.2, 2.5, 2.8, 3.2, 3.5],
            column_length_factor: 1.0,
            start_temp: 60.0,
            end_temp: 280.0,
            ramp_rate: 10.0,
            carrier_pressure: 30.0,
            split_ratio: 50.0,
            initial_hold: 1.0,
            final_hold: 1.0,
            carrier_gas: CarrierGas::Helium,
            distribution: DistributionMode::Random,
            gas_flow: true,
            van_deemter: true,
        }
    }
}

impl SimulationConfig {
    /// Nominal retention factor for one class.
    pub fn nominal_retention(&self, class: AnalyteClass) -> f64 {
        self.retention_factors[class.index()]
    }

    /// Set the nominal retention factor for one class.
    pub fn set_retention(&mut self, class: AnalyteClass, rf: f64) {
        self.retention_factors[class.index()] = rf;
    }

    /// Current column geometry.
    pub fn geometry(&self) -> ColumnGeometry {
        ColumnGeometry::from_length_factor(self.column_length_factor)
    }

    /// Temperature program view of the configuration.
    pub fn temperature_program(&self) -> TemperatureProgram {
        TemperatureProgram {
            start_temp: self.start_temp,
            end_temp: self.end_temp,
            ramp_rate: self.ramp_rate,
            initial_hold_min: self.initial_hold,
            final_hold_min: self.final_hold,
        }
    }

    /// Validate that all parameters are physically meaningful.
    ///
    /// Called by the orchestrator on construction and on every configuration
    /// update, so the per-tick numerics can rely on strictly positive,
    /// finite inputs.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(Error::InvalidParam("particle_count must be > 0".into()));
        }
        for class in AnalyteClass::ALL {
            let rf = self.nominal_retention(class);
            if !rf.is_finite() || rf <= 0.0 {
                return Err(Error::InvalidParam(format!(
                    "retention factor for {} must be finite and > 0, got {}",
                    class, rf
                )));
            }
        }
        for (name, value) in [
            ("column_length_factor", self.column_length_factor),
            ("carrier_pressure", self.carrier_pressure),
            ("split_ratio", self.split_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{} must be finite and > 0, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("ramp_rate", self.ramp_rate),
            ("initial_hold", self.initial_hold),
            ("final_hold", self.final_hold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }
        if !self.start_temp.is_finite() || !self.end_temp.is_finite() {
            return Err(Error::NonFinite("temperature bounds".into()));
        }
        // The program never ramps down; a lower end temperature would pin
        // the oven below the start temperature on the first ramp tick.
        if self.end_temp < self.start_temp {
            return Err(Error::InvalidParam(format!(
                "end_temp ({}) must be >= start_temp ({})",
                self.end_temp, self.start_temp
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
