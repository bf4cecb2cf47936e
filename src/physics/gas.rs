//! Carrier gas property table
//!
//! Static lookup of the physical constants of the supported carrier gases.
//! Viscosity and diffusivity are *relative* values (helium viscosity = 1.0);
//! they are consumed by the flow model together with fixed unit-scale
//! factors, so only their ratios matter for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical constants of one carrier gas.
///
/// # Fields
///
/// - `viscosity`: relative dynamic viscosity (He = 1.0)
/// - `density`: density at STP \[g/L\]
/// - `diffusivity`: relative diffusion coefficient (H₂ = 1.0)
/// - `thermal_conductivity`: thermal conductivity \[W/(m·K)\]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub viscosity: f64,
    pub density: f64,
    pub diffusivity: f64,
    pub thermal_conductivity: f64,
}

/// Supported carrier gases.
///
/// # Example
///
/// ```rust
/// use gcms_rs::physics::CarrierGas;
///
/// let he = CarrierGas::Helium.properties();
/// let h2 = CarrierGas::Hydrogen.properties();
/// assert!(h2.diffusivity > he.diffusivity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CarrierGas {
    #[default]
    Helium,
    Hydrogen,
    Nitrogen,
}

impl CarrierGas {
    /// All supported gases, in display order.
    pub const ALL: [CarrierGas; 3] = [
        CarrierGas::Helium,
        CarrierGas::Hydrogen,
        CarrierGas::Nitrogen,
    ];

    /// Physical constants for this gas.
    pub fn properties(self) -> GasProperties {
        match self {
            CarrierGas::Helium => GasProperties {
                viscosity: 1.0,
                density: 0.1786,
                diffusivity: 0.7,
                thermal_conductivity: 0.151,
            },
            CarrierGas::Hydrogen => GasProperties {
                viscosity: 0.7,
                density: 0.0899,
                diffusivity: 1.0,
                thermal_conductivity: 0.187,
            },
            CarrierGas::Nitrogen => GasProperties {
                viscosity: 1.3,
                density: 1.251,
                diffusivity: 0.5,
                thermal_conductivity: 0.026,
            },
        }
    }

    /// Chemical symbol, e.g. for plot legends and CSV headers.
    pub fn symbol(self) -> &'static str {
        match self {
            CarrierGas::Helium => "He",
            CarrierGas::Hydrogen => "H2",
            CarrierGas::Nitrogen => "N2",
        }
    }
}

impl fmt::Display for CarrierGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helium_properties() {
        let p = CarrierGas::Helium.properties();
        assert_eq!(p.viscosity, 1.0);
        assert_eq!(p.density, 0.1786);
        assert_eq!(p.diffusivity, 0.7);
        assert_eq!(p.thermal_conductivity, 0.151);
    }

    #[test]
    fn test_diffusivity_ordering() {
        // Lighter carrier → faster diffusion: H2 > He > N2
        let h2 = CarrierGas::Hydrogen.properties().diffusivity;
        let he = CarrierGas::Helium.properties().diffusivity;
        let n2 = CarrierGas::Nitrogen.properties().diffusivity;
        assert!(h2 > he);
        assert!(he > n2);
    }

    #[test]
    fn test_all_properties_positive() {
        for gas in CarrierGas::ALL {
            let p = gas.properties();
            assert!(p.viscosity > 0.0);
            assert!(p.density > 0.0);
            assert!(p.diffusivity > 0.0);
            assert!(p.thermal_conductivity > 0.0);
        }
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(format!("{}", CarrierGas::Helium), "He");
        assert_eq!(format!("{}", CarrierGas::Hydrogen), "H2");
        assert_eq!(format!("{}", CarrierGas::Nitrogen), "N2");
    }

    #[test]
    fn test_default_is_helium() {
        assert_eq!(CarrierGas::default(), CarrierGas::Helium);
    }
}
