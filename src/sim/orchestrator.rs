//! Simulation clock and orchestration
//!
//! [`Simulation`] owns the complete mutable state of one run — particle
//! population, detector log, chromatogram, clock and run flags — and drives
//! the physics components in a fixed order each tick:
//!
//! 1. recompute the column geometry from the current configuration (mid-run
//!    column-length changes take effect immediately),
//! 2. evaluate the temperature program and the van't Hoff factor once,
//!    shared by every particle this tick,
//! 3. advance every undetected particle,
//! 4. detect column-exit crossings and stamp them into the log,
//! 5. rebuild the chromatogram.
//!
//! The simulation is single-threaded and step-driven: an external
//! render/event loop calls [`Simulation::tick`] with a fixed `dt` (0.5 time
//! units in the reference behavior), decoupled from the wall-clock frame
//! rate. Each instance owns its state exclusively — construct as many
//! independent simulations as needed, there is no global instance.
//!
//! # Example
//!
//! ```rust
//! use gcms_rs::sim::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::with_seed(SimulationConfig::default(), 42).unwrap();
//! sim.inject().unwrap();
//! for _ in 0..240 {
//!     sim.tick(0.5);
//! }
//! let detected = sim.particles().iter().filter(|p| p.detected).count();
//! assert!(detected > 0);
//! ```

use crate::error::Result;
use crate::models::injection::{inject, InjectionSite};
use crate::models::particle::Particle;
use crate::physics::{compute_flow, temp_factor, FlowParameters, OvenState};
use crate::sim::config::{ColumnGeometry, SimulationConfig};
use crate::sim::detector::{Chromatogram, DetectorLog};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

/// One self-contained simulation run: state, clock and actions.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    geometry: ColumnGeometry,
    particles: Vec<Particle>,
    detector: DetectorLog,
    chromatogram: Chromatogram,
    clock: f64,
    running: bool,
    paused: bool,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation with a nondeterministic RNG seed.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_seed(config, rng().random())
    }

    /// Create a simulation with a fixed RNG seed (reproducible runs).
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let geometry = config.geometry();
        Ok(Self {
            config,
            geometry,
            particles: Vec::new(),
            detector: DetectorLog::new(),
            chromatogram: Chromatogram::new(),
            clock: 0.0,
            running: false,
            paused: false,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    // ====================================== Actions ======================================

    /// Inject a fresh particle population.
    ///
    /// Re-injection fully replaces simulation state: the detector log,
    /// chromatogram and clock are cleared before the new population is
    /// materialized, and the run is (re)started unpaused.
    pub fn inject(&mut self) -> Result<()> {
        // Hard reset first, so the injection-time temperature factor is
        // evaluated at t = 0 of the new run.
        self.detector.clear();
        self.chromatogram.clear();
        self.clock = 0.0;
        self.geometry = self.config.geometry();

        let flow = if self.config.gas_flow {
            compute_flow(
                self.config.carrier_pressure,
                self.config.carrier_gas,
                self.config.column_length_factor,
            )
        } else {
            FlowParameters::FIXED
        };

        let oven = self.config.temperature_program().evaluate(self.clock);
        let factor = temp_factor(oven.temperature, self.config.start_temp);

        let site = InjectionSite {
            entry_x: self.geometry.start_x,
            column_y: self.geometry.y,
            split_ratio: self.config.split_ratio,
            temp_factor: factor,
            van_deemter: self.config.van_deemter,
        };

        self.particles = inject(
            self.config.particle_count,
            &self.config.retention_factors,
            self.config.distribution,
            site,
            flow,
            &mut self.rng,
        )?;

        self.running = true;
        self.paused = false;

        debug!(
            count = self.particles.len(),
            gas = %self.config.carrier_gas,
            pressure = self.config.carrier_pressure,
            "injection complete"
        );
        Ok(())
    }

    /// Advance the simulation by one fixed time step.
    ///
    /// No-op when not running or paused, except that the column geometry is
    /// still refreshed from the configuration so the renderer always sees
    /// the current column length.
    pub fn tick(&mut self, dt: f64) {
        self.geometry = self.config.geometry();

        if !self.running || self.paused {
            return;
        }

        self.clock += dt;

        let oven = self.config.temperature_program().evaluate(self.clock);
        let factor = temp_factor(oven.temperature, self.config.start_temp);

        for particle in &mut self.particles {
            if particle.detected {
                continue;
            }
            particle.advance(dt, factor, oven.temperature, self.geometry.y, &mut self.rng);

            if self.geometry.in_detector(particle.x) {
                particle.detected = true;
                self.detector.record(particle.class, particle.time);
                trace!(
                    class = %particle.class,
                    time = particle.time,
                    "particle detected"
                );
            }
        }

        let horizon = self.max_elapsed_time();
        self.chromatogram.rebuild(&self.detector, horizon);
    }

    /// Pause the run; ticks become no-ops until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume a paused run.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause (the UI's pause button).
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Hard reset: drop the population, clear logs and chromatogram, zero
    /// the clock, stop running. Not a graceful stop — state replacement.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.detector.clear();
        self.chromatogram.clear();
        self.clock = 0.0;
        self.running = false;
        self.paused = false;
        debug!("simulation reset");
    }

    // =================================== Configuration ===================================

    /// Replace the configuration snapshot (validated).
    ///
    /// Column-length and temperature-program changes take effect on the next
    /// tick; particle count, gas and retention factors on the next
    /// injection.
    pub fn update_config(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    // ====================================== Queries ======================================

    /// Current particle population (positions, classes, detected flags).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current chromatogram trace.
    pub fn chromatogram(&self) -> &Chromatogram {
        &self.chromatogram
    }

    /// Current detector log.
    pub fn detector(&self) -> &DetectorLog {
        &self.detector
    }

    /// Current column geometry (for drawing column and detector).
    pub fn geometry(&self) -> ColumnGeometry {
        self.geometry
    }

    /// Elapsed simulation time.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    /// Oven state at the current clock.
    pub fn oven_state(&self) -> OvenState {
        self.config.temperature_program().evaluate(self.clock)
    }

    /// Maximum time-in-column across the population, 0.0 when empty.
    pub fn max_elapsed_time(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| p.time)
            .fold(0.0, f64::max)
    }

    /// True between injection and reset.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

// =================================================================================================
// Tests
// =================================================================================================
