//! Particle-level entities of the simulation
//!
//! - [`analyte`]: the fixed set of analyte classes ([`AnalyteClass`])
//! - [`particle`]: the [`Particle`] entity and its per-tick motion
//!   integrator
//! - [`injection`]: population creation ([`inject`], [`DistributionMode`])
//! - [`sampling`]: Gaussian sampling helper shared by injection and
//!   kinetics
//!
//! Particles are created in a batch at injection time, mutated every tick by
//! the orchestrator, and replaced wholesale on the next injection or reset —
//! never destroyed individually.

pub mod analyte;
pub mod injection;
pub mod particle;
pub mod sampling;

pub use analyte::AnalyteClass;
pub use injection::{inject, DistributionMode, InjectionSite};
pub use particle::Particle;
