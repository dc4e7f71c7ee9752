//! Break-even volume at a quoted freight price.
//!
//! Classic contribution-margin accounting over the annual simulation:
//! the tonnage at which freight revenue covers fixed plus variable cost.
//! A price at or below the variable cost per tonne can never break even,
//! however much cargo moves; that is a reported outcome, not an error.

use hv_core::Scenario;
use hv_sim::{simulate_year, AnnualOptions};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BreakEvenOutcome {
    Reachable {
        /// Tonnage at which revenue equals total cost
        annual_tonnes: f64,
        /// Round trips needed to carry it, at the mean load per trip
        trips: f64,
        /// Break-even tonnage over the convoy's annual capacity; above
        /// 1.0 one convoy cannot reach it inside the year
        capacity_utilization: f64,
        /// Price minus variable cost, currency per tonne
        contribution_margin_per_tonne: f64,
    },
    Unreachable {
        freight_price_per_tonne: f64,
        /// None when the scenario moves no cargo at all
        variable_cost_per_tonne: Option<f64>,
    },
}

/// Break-even tonnage for one convoy at a quoted freight price.
pub fn break_even(
    scenario: &Scenario,
    freight_price_per_tonne: f64,
) -> AnalysisResult<BreakEvenOutcome> {
    if !(freight_price_per_tonne.is_finite() && freight_price_per_tonne >= 0.0) {
        return Err(AnalysisError::InvalidArg {
            what: "freight price must be finite and non-negative",
        });
    }

    let result = simulate_year(scenario, &AnnualOptions::default())?;

    let Some(variable_per_tonne) = result.variable_cost_per_tonne() else {
        return Ok(BreakEvenOutcome::Unreachable {
            freight_price_per_tonne,
            variable_cost_per_tonne: None,
        });
    };

    // Equality included: zero margin never recovers fixed cost
    if freight_price_per_tonne <= variable_per_tonne {
        return Ok(BreakEvenOutcome::Unreachable {
            freight_price_per_tonne,
            variable_cost_per_tonne: Some(variable_per_tonne),
        });
    }

    let margin = freight_price_per_tonne - variable_per_tonne;
    let annual_tonnes = result.fixed_annual_cost() / margin;
    let mean_load_per_trip = result.annual_cargo_t / f64::from(result.annual_trips);

    Ok(BreakEvenOutcome::Reachable {
        annual_tonnes,
        trips: annual_tonnes / mean_load_per_trip,
        capacity_utilization: annual_tonnes / result.annual_cargo_t,
        contribution_margin_per_tonne: margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::base_scenario;

    #[test]
    fn generous_price_breaks_even_under_capacity() {
        let outcome = break_even(&base_scenario(), 1_000.0).unwrap();
        let BreakEvenOutcome::Reachable {
            annual_tonnes,
            trips,
            capacity_utilization,
            contribution_margin_per_tonne,
        } = outcome
        else {
            panic!("expected a reachable break-even");
        };
        assert!(annual_tonnes > 0.0);
        assert!(trips > 0.0);
        assert!(capacity_utilization > 0.0);
        assert!(contribution_margin_per_tonne > 0.0);
    }

    #[test]
    fn higher_price_needs_less_volume() {
        let low = break_even(&base_scenario(), 300.0).unwrap();
        let high = break_even(&base_scenario(), 900.0).unwrap();
        let (BreakEvenOutcome::Reachable { annual_tonnes: t_low, .. },
             BreakEvenOutcome::Reachable { annual_tonnes: t_high, .. }) = (low, high)
        else {
            panic!("expected both prices to break even");
        };
        assert!(t_high < t_low);
    }

    #[test]
    fn price_equal_to_variable_cost_is_unreachable() {
        let s = base_scenario();
        let result = simulate_year(&s, &AnnualOptions::default()).unwrap();
        let variable_per_tonne = result.variable_cost_per_tonne().unwrap();

        let outcome = break_even(&s, variable_per_tonne).unwrap();
        assert!(matches!(
            outcome,
            BreakEvenOutcome::Unreachable {
                variable_cost_per_tonne: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn zero_price_is_unreachable() {
        let outcome = break_even(&base_scenario(), 0.0).unwrap();
        assert!(matches!(outcome, BreakEvenOutcome::Unreachable { .. }));
    }

    #[test]
    fn dry_year_reports_undefined_variable_cost() {
        let mut s = base_scenario();
        s.operating.monthly_river_depth_m = [0.8; 12];
        let outcome = break_even(&s, 1_000.0).unwrap();
        assert!(matches!(
            outcome,
            BreakEvenOutcome::Unreachable {
                variable_cost_per_tonne: None,
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_price() {
        assert!(break_even(&base_scenario(), -1.0).is_err());
    }
}
