//! Operating cost: fixed annual provisions and the fuel model.

use hv_core::FinancialParameters;
use serde::{Deserialize, Serialize};

use crate::error::{CostError, CostResult};

/// Mean generator-set load as a fraction of main-engine power. Covers
/// hotel load, pumps and navigation systems; runs the whole cycle,
/// including port stays.
pub const AUX_LOAD_FACTOR: f64 = 0.25;

const MONTHS: f64 = 12.0;

/// Annual fixed operating cost, independent of trips sailed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedOpex {
    pub crew_cost: f64,
    pub catering_cost: f64,
    pub maintenance_cost: f64,
    pub insurance_cost: f64,
    pub admin_cost: f64,
    pub total: f64,
}

/// Fixed annual provisions for one convoy.
///
/// Maintenance and insurance scale with the replacement value of the
/// asset; payroll and catering with the crew complement; administrative
/// overhead is a flat rate on the operating subtotal.
pub fn fixed_opex(total_investment: f64, fin: &FinancialParameters) -> CostResult<FixedOpex> {
    if total_investment < 0.0 {
        return Err(CostError::NonPhysical {
            what: "investment cannot be negative",
        });
    }
    let crew = f64::from(fin.crew_size);
    let crew_cost = crew * fin.crew_monthly_salary * (1.0 + fin.social_charges_rate) * MONTHS;
    let catering_cost = crew * fin.catering_monthly_allowance * MONTHS;
    let maintenance_cost = total_investment * fin.maintenance_rate;
    let insurance_cost = total_investment * fin.insurance_rate;

    let operating_subtotal = crew_cost + catering_cost + maintenance_cost + insurance_cost;
    let admin_cost = operating_subtotal * fin.admin_overhead_rate;

    Ok(FixedOpex {
        crew_cost,
        catering_cost,
        maintenance_cost,
        insurance_cost,
        admin_cost,
        total: operating_subtotal + admin_cost,
    })
}

/// Mean auxiliary (generator) power drawn alongside a main-engine
/// output, BHP.
pub fn auxiliary_bhp(main_bhp: f64) -> f64 {
    main_bhp * AUX_LOAD_FACTOR
}

/// Fuel mass burned at a given brake power for a given duration, kg.
///
/// `mass = P (BHP) * t (h) * SFC (kg/BHP/h)`
pub fn fuel_mass_kg(bhp: f64, hours: f64, sfc_kg_per_hp_h: f64) -> f64 {
    bhp * hours * sfc_kg_per_hp_h
}

/// Monetary cost of a fuel mass. The market trades diesel by the litre;
/// the engineering side computes kilograms, so density bridges the two.
pub fn fuel_cost(mass_kg: f64, fin: &FinancialParameters) -> CostResult<f64> {
    if fin.fuel_density_t_per_m3 <= 0.0 {
        return Err(CostError::NonPhysical {
            what: "fuel density must be positive",
        });
    }
    // t/m3 is numerically kg/L
    let litres = mass_kg / fin.fuel_density_t_per_m3;
    Ok(litres * fin.fuel_price_per_litre)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fuel accounting is linear in both power and time.
        #[test]
        fn fuel_mass_is_bilinear(bhp in 1.0f64..10_000.0, hours in 0.0f64..10_000.0) {
            let sfc = 0.16;
            let one = fuel_mass_kg(bhp, hours, sfc);
            let double_power = fuel_mass_kg(2.0 * bhp, hours, sfc);
            let double_time = fuel_mass_kg(bhp, 2.0 * hours, sfc);
            prop_assert!((double_power - 2.0 * one).abs() <= 1e-9 * one.max(1.0));
            prop_assert!((double_time - 2.0 * one).abs() <= 1e-9 * one.max(1.0));
        }
    }
}
