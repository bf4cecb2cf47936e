//! Analyte particle and its motion integrator
//!
//! A [`Particle`] is one simulated analyte molecule: a continuous 2D position
//! (longitudinal `x` along the column, transverse `y` for visualization
//! jitter), an effective retention factor, elapsed time in the column, a
//! diffusion coefficient, a running peak-width estimate and the `detected`
//! flag.
//!
//! [`Particle::advance`] is the per-tick integrator. Each step combines:
//!
//! - square-root-damped retention (`v = v₀ / √RF`, so heavily retained
//!   classes slow down without stalling visually),
//! - a simplified van Deemter plate height `H = A + B/v + C·v`,
//! - the shared van't Hoff temperature factor,
//! - a minimum-speed floor at 10 % of the base velocity,
//! - peak broadening from temperature, residence time and diffusion, applied
//!   as Gaussian transverse jitter on top of a decaying sinusoidal sway.
//!
//! Once `detected` is set the particle is frozen: `advance` becomes a no-op
//! and the position never changes again.

use crate::error::{Error, Result};
use crate::models::analyte::AnalyteClass;
use crate::models::sampling::sample_gaussian;
use rand::Rng;

/// Lower floor for effective retention factors. Keeps `1/RF` and `1/√RF`
/// finite regardless of configuration and injection noise.
pub const MIN_RETENTION_FACTOR: f64 = 0.01;

/// Visualization gain applied to the flow-model velocity at particle
/// creation, converting m/s into column-units per time-unit.
pub const VELOCITY_VISUAL_GAIN: f64 = 2.0e7;

// Simplified van Deemter coefficients.
const EDDY_DIFFUSION: f64 = 0.1; // A
const LONGITUDINAL_DIFFUSION: f64 = 0.2; // B, scaled by the diffusion coefficient
const MASS_TRANSFER: f64 = 0.01; // C

// Effective-velocity shaping.
const TEMP_VELOCITY_BOOST: f64 = 2.0;
const MIN_SPEED_FRACTION: f64 = 0.1;

// Peak-width reference scales.
const PEAK_TEMP_REF: f64 = 323.15;
const PEAK_TIME_REF: f64 = 10.0;

// Transverse sway.
const SWAY_AMPLITUDE: f64 = 30.0;
const SWAY_DECAY_TIME: f64 = 200.0;
const SWAY_WAVENUMBER: f64 = 0.02;

/// One simulated analyte molecule.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Longitudinal position (distance along the column).
    pub x: f64,
    /// Transverse position (visualization jitter around the column axis).
    pub y: f64,
    /// Analyte class this particle belongs to.
    pub class: AnalyteClass,
    /// Effective retention factor: nominal × temperature factor × noise,
    /// floored at [`MIN_RETENTION_FACTOR`].
    pub retention_factor: f64,
    /// Elapsed time in the column.
    pub time: f64,
    /// Base velocity in visualization units (flow velocity × gain), > 0.
    base_velocity: f64,
    /// Diffusion coefficient, derived from the flow model and this
    /// particle's retention factor.
    pub diffusion_coeff: f64,
    /// Running peak-width estimate (σ of the transverse jitter).
    pub peak_width: f64,
    /// Apply van Deemter plate-height damping to the velocity. Defaults to
    /// true; disabled runs reduce to undamped retention-driven motion.
    pub van_deemter: bool,
    /// Set exactly once when the particle crosses the detector; never
    /// reverts, and the position is frozen afterwards.
    pub detected: bool,
}

impl Particle {
    /// Create a particle after validating invariants.
    ///
    /// `base_velocity` is the flow-model velocity in m/s; it is scaled by
    /// [`VELOCITY_VISUAL_GAIN`] here. The retention factor is floored at
    /// [`MIN_RETENTION_FACTOR`] so downstream divisions are always safe.
    ///
    /// # Errors
    ///
    /// `Error::NonFinite` if any input is NaN/infinite,
    /// `Error::InvalidParam` if `base_velocity` or `diffusion_coeff` is not
    /// strictly positive.
    pub fn new(
        x: f64,
        y: f64,
        class: AnalyteClass,
        retention_factor: f64,
        base_velocity: f64,
        diffusion_coeff: f64,
    ) -> Result<Self> {
        for (name, value) in [
            ("x", x),
            ("y", y),
            ("retention_factor", retention_factor),
            ("base_velocity", base_velocity),
            ("diffusion_coeff", diffusion_coeff),
        ] {
            if !value.is_finite() {
                return Err(Error::NonFinite(format!("particle {name}: {value}")));
            }
        }
        if base_velocity <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "base_velocity must be > 0, got {base_velocity}"
            )));
        }
        if diffusion_coeff <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "diffusion_coeff must be > 0, got {diffusion_coeff}"
            )));
        }

        Ok(Self {
            x,
            y,
            class,
            retention_factor: retention_factor.max(MIN_RETENTION_FACTOR),
            time: 0.0,
            base_velocity: base_velocity * VELOCITY_VISUAL_GAIN,
            diffusion_coeff,
            peak_width: 1.0,
            van_deemter: true,
            detected: false,
        })
    }

    /// Plate height from the simplified van Deemter equation
    /// `H = A + B/v + C·v`.
    fn plate_height(&self, velocity: f64) -> f64 {
        let a = EDDY_DIFFUSION;
        let b = LONGITUDINAL_DIFFUSION * self.diffusion_coeff;
        let c = MASS_TRANSFER;

        a + b / velocity + c * velocity
    }

    /// Advance the particle by one time step.
    ///
    /// No-op when the particle is already detected. Never produces
    /// non-finite values: `retention_factor` and `base_velocity` are
    /// strictly positive by construction.
    ///
    /// # Arguments
    ///
    /// * `dt` - Time step
    /// * `temp_factor` - Shared van't Hoff factor for this tick
    /// * `current_temp` - Current oven temperature \[°C\]
    /// * `column_y` - Column axis y position (transverse reference)
    /// * `rng` - Random source for the transverse jitter
    pub fn advance(
        &mut self,
        dt: f64,
        temp_factor: f64,
        current_temp: f64,
        column_y: f64,
        rng: &mut impl Rng,
    ) {
        if self.detected {
            return;
        }

        self.time += dt;

        let velocity = self.base_velocity / self.retention_factor.sqrt();
        let hetp = if self.van_deemter {
            self.plate_height(velocity)
        } else {
            0.0
        };

        let effective_velocity =
            (velocity / (1.0 + hetp)) * temp_factor.sqrt() * TEMP_VELOCITY_BOOST;

        // Minimum speed floor so no particle ever fully stalls
        let min_speed = self.base_velocity * MIN_SPEED_FRACTION;
        self.x += effective_velocity.max(min_speed) * dt;

        // Peak broadening: temperature, residence time and diffusion terms
        // combined multiplicatively
        let temp_contribution = (current_temp / PEAK_TEMP_REF).sqrt();
        let time_contribution = (self.time / PEAK_TIME_REF).sqrt();
        let diffusion_contribution = (2.0 * self.diffusion_coeff * self.time).sqrt();

        self.peak_width = (1.0 + diffusion_contribution) * temp_contribution * time_contribution;

        // Decaying sinusoidal sway plus Gaussian jitter with σ = peak width
        let amplitude =
            SWAY_AMPLITUDE * (1.0 / temp_factor) * (-self.time / SWAY_DECAY_TIME).exp();
        let jitter = sample_gaussian(rng, 0.0, self.peak_width);
        self.y = column_y + amplitude * (SWAY_WAVENUMBER * self.x).sin() + jitter;
    }

    /// Base velocity in visualization units (after the visual gain).
    pub fn base_velocity(&self) -> f64 {
        self.base_velocity
    }
}

// =================================================================================================
// Tests
// =================================================================================================
