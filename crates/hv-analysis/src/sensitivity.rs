//! One-at-a-time sensitivity of the unit transport cost.
//!
//! Each tracked input is perturbed by a symmetric fraction while all
//! others hold their base value; the report ranks inputs by the largest
//! absolute deviation of cost per tonne they produced.

use hv_core::Scenario;
use hv_sim::{simulate_year, AnnualOptions};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Inputs the one-at-a-time perturbation can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackedParameter {
    FuelPrice,
    CruiseSpeed,
    InterestRate,
    CrewSalary,
    CurrentSpeed,
    OperatingDays,
    Co2Factor,
}

impl TrackedParameter {
    pub const ALL: [Self; 7] = [
        Self::FuelPrice,
        Self::CruiseSpeed,
        Self::InterestRate,
        Self::CrewSalary,
        Self::CurrentSpeed,
        Self::OperatingDays,
        Self::Co2Factor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FuelPrice => "fuel price",
            Self::CruiseSpeed => "cruise speed",
            Self::InterestRate => "interest rate",
            Self::CrewSalary => "crew salary",
            Self::CurrentSpeed => "current speed",
            Self::OperatingDays => "operating days",
            Self::Co2Factor => "CO2 emission factor",
        }
    }

    fn scale(self, scenario: &mut Scenario, factor: f64) {
        match self {
            Self::FuelPrice => scenario.financial.fuel_price_per_litre *= factor,
            Self::CruiseSpeed => scenario.operating.cruise_speed_knots *= factor,
            Self::InterestRate => scenario.financial.interest_rate *= factor,
            Self::CrewSalary => scenario.financial.crew_monthly_salary *= factor,
            Self::CurrentSpeed => scenario.operating.current_speed_knots *= factor,
            Self::OperatingDays => {
                // the upward perturbation saturates at the calendar
                scenario.operating.operating_days_per_year =
                    (scenario.operating.operating_days_per_year * factor).min(366.0);
            }
            Self::Co2Factor => scenario.financial.co2_factor_kg_per_kg_fuel *= factor,
        }
    }
}

/// Cost response of one tracked input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityEntry {
    pub parameter: TrackedParameter,
    /// Cost per tonne with the input scaled down; None when that run
    /// moved no cargo
    pub low_cost_per_tonne: Option<f64>,
    /// Cost per tonne with the input scaled up
    pub high_cost_per_tonne: Option<f64>,
    /// Largest absolute deviation from the base cost per tonne
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Perturbation applied to each side, as a fraction of the base value
    pub fraction: f64,
    pub base_cost_per_tonne: f64,
    /// Entries sorted by descending [`SensitivityEntry::delta`]; ties
    /// keep the [`TrackedParameter::ALL`] order
    pub entries: Vec<SensitivityEntry>,
}

/// Perturb every tracked input by `±fraction` and rank the responses.
pub fn sensitivity_analysis(
    scenario: &Scenario,
    fraction: f64,
) -> AnalysisResult<SensitivityReport> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(AnalysisError::InvalidArg {
            what: "perturbation fraction must lie in (0, 1)",
        });
    }

    let base = simulate_year(scenario, &AnnualOptions::default())?;
    let base_cost_per_tonne = base.cost_per_tonne.ok_or(AnalysisError::NoViableCandidate {
        what: "base scenario moves no cargo; unit cost is undefined",
    })?;

    let mut entries: Vec<SensitivityEntry> = Vec::with_capacity(TrackedParameter::ALL.len());
    for parameter in TrackedParameter::ALL {
        let low_cost_per_tonne = perturbed_cost(scenario, parameter, 1.0 - fraction)?;
        let high_cost_per_tonne = perturbed_cost(scenario, parameter, 1.0 + fraction)?;

        let delta = [low_cost_per_tonne, high_cost_per_tonne]
            .into_iter()
            .flatten()
            .map(|c| (c - base_cost_per_tonne).abs())
            .fold(0.0, f64::max);

        entries.push(SensitivityEntry {
            parameter,
            low_cost_per_tonne,
            high_cost_per_tonne,
            delta,
        });
    }

    // Stable sort keeps declaration order among equal deltas
    entries.sort_by(|a, b| b.delta.total_cmp(&a.delta));

    Ok(SensitivityReport {
        fraction,
        base_cost_per_tonne,
        entries,
    })
}

fn perturbed_cost(
    scenario: &Scenario,
    parameter: TrackedParameter,
    factor: f64,
) -> AnalysisResult<Option<f64>> {
    let mut perturbed = scenario.clone();
    parameter.scale(&mut perturbed, factor);
    let result = simulate_year(&perturbed, &AnnualOptions::default())?;
    Ok(result.cost_per_tonne)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::base_scenario;

    #[test]
    fn report_covers_every_tracked_input_once() {
        let report = sensitivity_analysis(&base_scenario(), 0.10).unwrap();
        assert_eq!(report.entries.len(), TrackedParameter::ALL.len());
        for p in TrackedParameter::ALL {
            assert_eq!(report.entries.iter().filter(|e| e.parameter == p).count(), 1);
        }
    }

    #[test]
    fn entries_are_ranked_by_influence() {
        let report = sensitivity_analysis(&base_scenario(), 0.10).unwrap();
        for w in report.entries.windows(2) {
            assert!(w[0].delta >= w[1].delta);
        }
    }

    #[test]
    fn emission_factor_never_moves_the_cost() {
        // CO2 accounting is derived from fuel already paid for; scaling
        // the factor must leave the unit cost untouched, so it ranks last
        let report = sensitivity_analysis(&base_scenario(), 0.10).unwrap();
        let co2 = report
            .entries
            .iter()
            .find(|e| e.parameter == TrackedParameter::Co2Factor)
            .unwrap();
        assert_eq!(co2.delta, 0.0);
        assert_eq!(report.entries.last().unwrap().parameter, TrackedParameter::Co2Factor);
    }

    #[test]
    fn fuel_price_moves_the_cost_monotonically() {
        let report = sensitivity_analysis(&base_scenario(), 0.10).unwrap();
        let fuel = report
            .entries
            .iter()
            .find(|e| e.parameter == TrackedParameter::FuelPrice)
            .unwrap();
        assert!(fuel.low_cost_per_tonne.unwrap() < report.base_cost_per_tonne);
        assert!(fuel.high_cost_per_tonne.unwrap() > report.base_cost_per_tonne);
        assert!(fuel.delta > 0.0);
    }

    #[test]
    fn near_full_year_availability_is_perturbed_within_the_calendar() {
        // 350 * 1.10 would exceed 366 days and fail validation; the
        // upward side clamps instead of aborting the whole analysis
        let mut s = base_scenario();
        s.operating.operating_days_per_year = 350.0;
        let report = sensitivity_analysis(&s, 0.10).unwrap();
        let days = report
            .entries
            .iter()
            .find(|e| e.parameter == TrackedParameter::OperatingDays)
            .unwrap();
        assert!(days.low_cost_per_tonne.is_some());
        assert!(days.high_cost_per_tonne.is_some());
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        assert!(sensitivity_analysis(&base_scenario(), 0.0).is_err());
        assert!(sensitivity_analysis(&base_scenario(), 1.0).is_err());
        assert!(sensitivity_analysis(&base_scenario(), -0.1).is_err());
    }
}
