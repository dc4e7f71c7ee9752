//! Service-speed optimization over a sweep grid.
//!
//! Evaluates the annual simulation at every grid speed and picks the
//! lowest cost per tonne. With an installed-power ceiling, speeds whose
//! demand exceeds the rating stay in the table as infeasible rows; the
//! winner is always feasible.

use hv_core::Scenario;
use hv_sim::{simulate_year, AnnualOptions, SimulationResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::sweep::SweepRange;

/// One evaluated grid speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedCandidate {
    pub speed_knots: f64,
    /// Moved cargo and, under a power ceiling, stayed within the rating
    pub feasible: bool,
    pub cost_per_tonne: Option<f64>,
    pub total_annual_cost: f64,
    pub annual_cargo_t: f64,
    pub peak_required_bhp: f64,
    pub co2_tonnes: f64,
    pub co2_kg_per_tonne: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedOptimization {
    /// Installed-power ceiling the search ran under, if any
    pub installed_bhp_cap: Option<f64>,
    /// One row per grid speed, in ascending speed order
    pub candidates: Vec<SpeedCandidate>,
    best_index: usize,
}

impl SpeedOptimization {
    pub fn best(&self) -> &SpeedCandidate {
        &self.candidates[self.best_index]
    }
}

/// Find the grid speed with the lowest cost per tonne.
///
/// Without a cap, each speed gets an engine sized for itself. With a
/// cap, every speed is checked against the same installed rating. Ties
/// go to the lower speed.
///
/// # Errors
/// `NoViableCandidate` when no grid speed is feasible.
pub fn optimize_speed(
    scenario: &Scenario,
    speeds: &SweepRange,
    installed_bhp_cap: Option<f64>,
) -> AnalysisResult<SpeedOptimization> {
    let grid = speeds.values();
    let candidates: Vec<SpeedCandidate> = grid
        .par_iter()
        .map(|&speed_knots| {
            let result = simulate_year(
                scenario,
                &AnnualOptions {
                    monthly_speed_knots: Some([speed_knots; 12]),
                    installed_bhp: installed_bhp_cap,
                    pusher_basis: None,
                },
            )?;
            Ok(candidate_from(speed_knots, &result))
        })
        .collect::<AnalysisResult<_>>()?;

    let best_index = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.feasible)
        .filter_map(|(i, c)| c.cost_per_tonne.map(|cost| (i, cost)))
        // strict less-than keeps the lowest speed on ties
        .fold(None, |best: Option<(usize, f64)>, (i, cost)| match best {
            Some((_, best_cost)) if cost >= best_cost => best,
            _ => Some((i, cost)),
        })
        .map(|(i, _)| i)
        .ok_or(AnalysisError::NoViableCandidate {
            what: "no grid speed is feasible for this scenario",
        })?;

    debug!(
        speeds = candidates.len(),
        best_knots = candidates[best_index].speed_knots,
        "speed sweep complete"
    );

    Ok(SpeedOptimization {
        installed_bhp_cap,
        candidates,
        best_index,
    })
}

fn candidate_from(speed_knots: f64, result: &SimulationResult) -> SpeedCandidate {
    SpeedCandidate {
        speed_knots,
        feasible: result.viable && result.power_sufficient,
        cost_per_tonne: result.cost_per_tonne,
        total_annual_cost: result.total_annual_cost,
        annual_cargo_t: result.annual_cargo_t,
        peak_required_bhp: result.peak_required_bhp,
        co2_tonnes: result.emissions.co2_tonnes,
        co2_kg_per_tonne: result.emissions.intensity_kg_per_tonne,
    }
}
