//! Particle injection
//!
//! Materializes a configured number of particles at the column inlet, split
//! across the analyte classes either as evenly as possible (uniform mode,
//! remainder going to the first classes in enumeration order) or by sampling
//! a class uniformly at random per particle.
//!
//! Every particle receives:
//!
//! - a longitudinal start position `entry_x + N(0, w)` where `w` is the
//!   injection band width (`20 / split_ratio`),
//! - a transverse start position `N(column_y, w/2)`,
//! - an effective retention factor
//!   `nominal × temp_factor × (1 + N(0, 0.05))`,
//! - a diffusion coefficient `base_diffusion / RF` (smaller molecules elute
//!   early and diffuse fast).

use crate::error::Result;
use crate::models::analyte::AnalyteClass;
use crate::models::particle::Particle;
use crate::models::sampling::sample_gaussian;
use crate::physics::FlowParameters;
use num::integer::div_mod_floor;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Injection band width numerator: `width = INJECTION_BAND / split_ratio`.
const INJECTION_BAND: f64 = 20.0;

/// Relative standard deviation of the per-particle retention factor noise.
const RETENTION_NOISE_REL: f64 = 0.05;

/// How injected particles are distributed across analyte classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistributionMode {
    /// Split the count as evenly as possible across all classes; any
    /// remainder goes to the first classes in enumeration order.
    Uniform,
    /// Each particle samples its class uniformly at random.
    #[default]
    Random,
}

/// Per-injection parameters, assembled by the orchestrator from the
/// configuration snapshot and the flow model.
#[derive(Debug, Clone, Copy)]
pub struct InjectionSite {
    /// Column entry x (particles start in a band around it).
    pub entry_x: f64,
    /// Column axis y.
    pub column_y: f64,
    /// Split ratio; higher split → narrower injection band.
    pub split_ratio: f64,
    /// Shared van't Hoff factor at injection time.
    pub temp_factor: f64,
    /// Apply van Deemter broadening to the created particles.
    pub van_deemter: bool,
}

/// Materialize a full particle population.
///
/// `retention_factors` are the nominal per-class values from configuration,
/// indexed by [`AnalyteClass::index`]. Returns exactly `count` particles.
pub fn inject(
    count: usize,
    retention_factors: &[f64; AnalyteClass::COUNT],
    mode: DistributionMode,
    site: InjectionSite,
    flow: FlowParameters,
    rng: &mut impl Rng,
) -> Result<Vec<Particle>> {
    let mut particles = Vec::with_capacity(count);

    match mode {
        DistributionMode::Uniform => {
            let (per_class, remainder) = div_mod_floor(count, AnalyteClass::COUNT);
            for (i, class) in AnalyteClass::ALL.into_iter().enumerate() {
                let class_count = per_class + usize::from(i < remainder);
                spawn_group(
                    &mut particles,
                    class_count,
                    class,
                    retention_factors[class.index()],
                    site,
                    flow,
                    rng,
                )?;
            }
        }
        DistributionMode::Random => {
            for _ in 0..count {
                let class = AnalyteClass::ALL[rng.random_range(0..AnalyteClass::COUNT)];
                spawn_group(
                    &mut particles,
                    1,
                    class,
                    retention_factors[class.index()],
                    site,
                    flow,
                    rng,
                )?;
            }
        }
    }

    debug!(count = particles.len(), ?mode, "injected particle population");
    Ok(particles)
}

/// Create one group of particles of the same class.
fn spawn_group(
    particles: &mut Vec<Particle>,
    count: usize,
    class: AnalyteClass,
    nominal_rf: f64,
    site: InjectionSite,
    flow: FlowParameters,
    rng: &mut impl Rng,
) -> Result<()> {
    let injection_width = INJECTION_BAND / site.split_ratio;

    for _ in 0..count {
        let x = site.entry_x + sample_gaussian(rng, 0.0, injection_width);
        let y = sample_gaussian(rng, site.column_y, injection_width / 2.0);

        let rf = nominal_rf * site.temp_factor;
        let final_rf = rf + sample_gaussian(rng, 0.0, RETENTION_NOISE_REL * rf);

        // Retention scales the per-particle diffusion down: Particle::new
        // floors final_rf, so divide by the floored value it will store.
        let stored_rf = final_rf.max(crate::models::particle::MIN_RETENTION_FACTOR);
        let diffusion_coeff = flow.base_diffusion / stored_rf;

        let mut particle = Particle::new(
            x,
            y,
            class,
            final_rf,
            flow.base_velocity,
            diffusion_coeff,
        )?;
        particle.van_deemter = site.van_deemter;
        particles.push(particle);
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
