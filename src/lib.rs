//! gcms-rs: Particle-Based GC/MS Separation Simulator
//!
//! A toy-level simulation of gas chromatography coupled to mass
//! spectrometry: a population of analyte particles is injected into a
//! column, migrates under a temperature-dependent retention model with
//! diffusion-driven spreading, and detector crossings are aggregated over
//! time into a synthetic chromatogram.
//!
//! # Architecture
//!
//! The crate separates stateless physics from stateful orchestration:
//!
//! 1. **Physics** ([`physics`]) — pure closed-form functions: carrier gas
//!    properties, Hagen–Poiseuille flow, the hold–ramp–hold temperature
//!    program and the clamped van't Hoff retention correction.
//!
//! 2. **Models** ([`models`]) — the particle entities: analyte classes,
//!    the per-tick motion integrator (retention damping + van Deemter
//!    broadening + transverse jitter) and population injection.
//!
//! 3. **Simulation** ([`sim`]) — one caller-owned [`sim::Simulation`]
//!    instance per run, driving the tick loop and aggregating detections
//!    into a chromatogram.
//!
//! Rendering, widgets and event handling are external concerns: the
//! simulation exposes particle positions, the chromatogram trace and the
//! column geometry, and consumes configuration snapshots plus action
//! triggers (`inject`, `tick`, `pause`/`resume`, `reset`).
//!
//! # Quick Start
//!
//! ```rust
//! use gcms_rs::prelude::*;
//!
//! // 1. Configure the instrument
//! let mut config = SimulationConfig::default();
//! config.particle_count = 800;
//! config.distribution = DistributionMode::Uniform;
//!
//! // 2. Build a simulation (seeded for reproducibility) and inject
//! let mut sim = Simulation::with_seed(config, 42).unwrap();
//! sim.inject().unwrap();
//!
//! // 3. Drive the tick loop (dt = 0.5 time units per call)
//! for _ in 0..240 {
//!     sim.tick(0.5);
//! }
//!
//! // 4. Read results for rendering or export
//! let detected = sim.particles().iter().filter(|p| p.detected).count();
//! assert!(detected > 0);
//! assert!(!sim.chromatogram().is_empty());
//! ```
//!
//! # Modules
//!
//! - [`physics`]: gas properties, flow model, temperature program
//! - [`models`]: analyte classes, particles, injection
//! - [`sim`]: configuration, detection, orchestration
//! - [`output`]: chromatogram plotting and CSV export (optional surface for
//!   headless use)
//! - [`error`]: crate error type

pub mod error;
pub mod models;
pub mod output;
pub mod physics;
pub mod sim;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use gcms_rs::prelude::*;
    //! ```
    pub use crate::error::{Error, Result};
    pub use crate::models::{AnalyteClass, DistributionMode, Particle};
    pub use crate::physics::{CarrierGas, TemperatureProgram};
    pub use crate::sim::{Chromatogram, ColumnGeometry, Simulation, SimulationConfig};
}
