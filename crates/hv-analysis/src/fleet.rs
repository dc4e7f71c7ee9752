//! Fleet sizing against an annual cargo demand, over candidate speeds.
//!
//! For every grid speed: whole convoys only, the smallest integer count
//! whose combined annual capacity covers the demand. The winner is the
//! speed minimizing fleet cost per demanded tonne, so the idle slack of
//! the last convoy is paid for, not hidden — a slower speed with fewer,
//! fuller convoys can beat a faster one that needs an extra hull.

use hv_core::Scenario;
use hv_sim::{simulate_year, AnnualOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::sweep::SweepRange;

/// A sized fleet at one candidate speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetPlan {
    pub convoys: u32,
    /// Annual capacity of one convoy at this speed, t
    pub convoy_capacity_t: f64,
    /// Combined annual capacity of the fleet, t
    pub fleet_capacity_t: f64,
    /// Demand over fleet capacity; at most 1.0 by construction
    pub utilization: f64,
    pub fleet_annual_cost: f64,
    /// Fleet cost spread over the demanded (not carried) tonnage
    pub cost_per_demanded_tonne: f64,
}

/// One evaluated grid speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetCandidate {
    pub speed_knots: f64,
    /// None when a convoy moves no cargo at this speed
    pub plan: Option<FleetPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSizing {
    pub annual_demand_t: f64,
    /// One row per grid speed, in ascending speed order
    pub candidates: Vec<FleetCandidate>,
    best_index: usize,
}

impl FleetSizing {
    pub fn best(&self) -> &FleetCandidate {
        &self.candidates[self.best_index]
    }
}

/// Size a fleet of identical convoys to carry `annual_demand_t`,
/// picking the candidate speed with the lowest fleet cost per demanded
/// tonne. Ties go to the lower speed.
///
/// # Errors
/// `NoViableCandidate` when no grid speed moves any cargo.
pub fn size_fleet(
    scenario: &Scenario,
    annual_demand_t: f64,
    speeds: &SweepRange,
) -> AnalysisResult<FleetSizing> {
    if !(annual_demand_t.is_finite() && annual_demand_t > 0.0) {
        return Err(AnalysisError::InvalidArg {
            what: "annual demand must be finite and positive",
        });
    }

    let grid = speeds.values();
    let candidates: Vec<FleetCandidate> = grid
        .par_iter()
        .map(|&speed_knots| {
            let per_convoy = simulate_year(
                scenario,
                &AnnualOptions {
                    monthly_speed_knots: Some([speed_knots; 12]),
                    installed_bhp: None,
                    pusher_basis: None,
                },
            )?;
            let plan = (per_convoy.annual_cargo_t > 0.0).then(|| {
                let convoys = (annual_demand_t / per_convoy.annual_cargo_t).ceil() as u32;
                let convoys_f = f64::from(convoys);
                let fleet_capacity_t = per_convoy.annual_cargo_t * convoys_f;
                let fleet_annual_cost = per_convoy.total_annual_cost * convoys_f;
                FleetPlan {
                    convoys,
                    convoy_capacity_t: per_convoy.annual_cargo_t,
                    fleet_capacity_t,
                    utilization: annual_demand_t / fleet_capacity_t,
                    fleet_annual_cost,
                    cost_per_demanded_tonne: fleet_annual_cost / annual_demand_t,
                }
            });
            Ok(FleetCandidate { speed_knots, plan })
        })
        .collect::<AnalysisResult<_>>()?;

    let best_index = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.plan.map(|p| (i, p.cost_per_demanded_tonne)))
        // strict less-than keeps the lowest speed on ties
        .fold(None, |best: Option<(usize, f64)>, (i, cost)| match best {
            Some((_, best_cost)) if cost >= best_cost => best,
            _ => Some((i, cost)),
        })
        .map(|(i, _)| i)
        .ok_or(AnalysisError::NoViableCandidate {
            what: "no grid speed moves any cargo; no fleet can serve the demand",
        })?;

    debug!(
        speeds = candidates.len(),
        best_knots = candidates[best_index].speed_knots,
        "fleet sizing sweep complete"
    );

    Ok(FleetSizing {
        annual_demand_t,
        candidates,
        best_index,
    })
}
