//! Analyte class enumeration
//!
//! The simulation tracks a fixed set of eight analyte classes, ordered from
//! least to most strongly retained. Each class carries a display color for
//! the external renderer and a label used in logs, plots and CSV exports.
//! Nominal retention factors are *not* stored here — they are configuration
//! values (see [`crate::sim::SimulationConfig`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed analyte classes, in enumeration (elution) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyteClass {
    Solvent,
    Nonpolar1,
    Nonpolar2,
    Semipolar1,
    Semipolar2,
    Polar1,
    Polar2,
    VeryPolar,
}

impl AnalyteClass {
    /// Number of analyte classes.
    pub const COUNT: usize = 8;

    /// All classes in enumeration order. Uniform injection distributes any
    /// remainder to the first classes of this array.
    pub const ALL: [AnalyteClass; Self::COUNT] = [
        AnalyteClass::Solvent,
        AnalyteClass::Nonpolar1,
        AnalyteClass::Nonpolar2,
        AnalyteClass::Semipolar1,
        AnalyteClass::Semipolar2,
        AnalyteClass::Polar1,
        AnalyteClass::Polar2,
        AnalyteClass::VeryPolar,
    ];

    /// Stable index into per-class arrays (`0..COUNT`).
    pub fn index(self) -> usize {
        match self {
            AnalyteClass::Solvent => 0,
            AnalyteClass::Nonpolar1 => 1,
            AnalyteClass::Nonpolar2 => 2,
            AnalyteClass::Semipolar1 => 3,
            AnalyteClass::Semipolar2 => 4,
            AnalyteClass::Polar1 => 5,
            AnalyteClass::Polar2 => 6,
            AnalyteClass::VeryPolar => 7,
        }
    }

    /// Display color (RGB) for the external renderer.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            AnalyteClass::Solvent => (255, 0, 0),
            AnalyteClass::Nonpolar1 => (0, 255, 0),
            AnalyteClass::Nonpolar2 => (0, 0, 255),
            AnalyteClass::Semipolar1 => (255, 255, 0),
            AnalyteClass::Semipolar2 => (255, 0, 255),
            AnalyteClass::Polar1 => (0, 255, 255),
            AnalyteClass::Polar2 => (128, 0, 0),
            AnalyteClass::VeryPolar => (0, 128, 0),
        }
    }

    /// Short label for logs, legends and CSV columns.
    pub fn label(self) -> &'static str {
        match self {
            AnalyteClass::Solvent => "solvent",
            AnalyteClass::Nonpolar1 => "nonpolar1",
            AnalyteClass::Nonpolar2 => "nonpolar2",
            AnalyteClass::Semipolar1 => "semipolar1",
            AnalyteClass::Semipolar2 => "semipolar2",
            AnalyteClass::Polar1 => "polar1",
            AnalyteClass::Polar2 => "polar2",
            AnalyteClass::VeryPolar => "verypolar",
        }
    }
}

impl fmt::Display for AnalyteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
