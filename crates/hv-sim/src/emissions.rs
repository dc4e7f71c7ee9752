//! Derived CO2 emissions.
//!
//! Purely a function of the fuel mass the cost model already computed;
//! never re-derives fuel, so cost and emissions stay consistent for any
//! given scenario.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsSummary {
    /// Tank-to-wake CO2, tonnes
    pub co2_tonnes: f64,
    /// kg CO2 per tonne of cargo moved; None when no cargo moved
    pub intensity_kg_per_tonne: Option<f64>,
}

/// CO2 mass and carbon intensity for a period.
pub fn emissions_from_fuel(
    fuel_kg: f64,
    cargo_t: f64,
    co2_factor_kg_per_kg_fuel: f64,
) -> EmissionsSummary {
    let co2_tonnes = fuel_kg * co2_factor_kg_per_kg_fuel / 1000.0;
    let intensity_kg_per_tonne = if cargo_t > 0.0 {
        Some(co2_tonnes * 1000.0 / cargo_t)
    } else {
        None
    };
    EmissionsSummary {
        co2_tonnes,
        intensity_kg_per_tonne,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marine_diesel_factor() {
        // 1000 kg of MDO at the IMO factor
        let e = emissions_from_fuel(1000.0, 500.0, 3.206);
        assert!((e.co2_tonnes - 3.206).abs() < 1e-12);
        assert!((e.intensity_kg_per_tonne.unwrap() - 6.412).abs() < 1e-9);
    }

    #[test]
    fn zero_cargo_has_undefined_intensity() {
        let e = emissions_from_fuel(1000.0, 0.0, 3.206);
        assert!(e.co2_tonnes > 0.0);
        assert!(e.intensity_kg_per_tonne.is_none());
    }

    #[test]
    fn no_fuel_no_emissions() {
        let e = emissions_from_fuel(0.0, 100.0, 3.206);
        assert_eq!(e.co2_tonnes, 0.0);
        assert_eq!(e.intensity_kg_per_tonne, Some(0.0));
    }
}
