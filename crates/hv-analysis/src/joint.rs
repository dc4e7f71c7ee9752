//! Joint design/operation optimization over an engine catalogue.
//!
//! Outer loop: each catalogue engine, priced at its quoted acquisition
//! cost. Inner decision, independent per month: the highest grid speed
//! whose power demand at that month's draft fits the installed rating.
//! A month no grid speed can serve is parked as power-limited. The
//! winner is the engine with the lowest cost per tonne of its schedule;
//! no winning schedule ever demands more power than its engine rating.

use hv_core::{EngineOption, Scenario, MONTHS_PER_YEAR};
use hv_cost::PusherCostBasis;
use hv_sim::{simulate_year, AnnualOptions, SimulationResult};
use hv_vessel::{operational_draft_m, required_power, solve_formation, ConvoyFormation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::sweep::SweepRange;

/// Demand may exceed the rating by this relative margin and still count
/// as served, absorbing rounding in the power model.
const POWER_MARGIN: f64 = 1.001;

/// One catalogue engine with its best monthly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointCandidate {
    pub engine: EngineOption,
    pub monthly_speed_knots: [f64; 12],
    pub feasible: bool,
    pub result: SimulationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointOptimization {
    /// One entry per catalogue engine, in catalogue order
    pub candidates: Vec<JointCandidate>,
    best_index: usize,
}

impl JointOptimization {
    pub fn best(&self) -> &JointCandidate {
        &self.candidates[self.best_index]
    }
}

/// Pick the catalogue engine and monthly speed schedule with the lowest
/// cost per tonne.
///
/// # Errors
/// `EmptyRange` for an empty catalogue; `NoViableCandidate` when no
/// engine yields a schedule that moves cargo.
pub fn optimize_design(
    scenario: &Scenario,
    engines: &[EngineOption],
    speeds: &SweepRange,
) -> AnalysisResult<JointOptimization> {
    if engines.is_empty() {
        return Err(AnalysisError::EmptyRange {
            what: "engine catalogue is empty",
        });
    }
    scenario.validate().map_err(hv_sim::SimError::from)?;
    let formation = solve_formation(&scenario.engineering).map_err(hv_sim::SimError::from)?;
    let grid = speeds.values();

    let candidates: Vec<JointCandidate> = engines
        .par_iter()
        .map(|&engine| evaluate_engine(scenario, formation, engine, &grid))
        .collect::<AnalysisResult<_>>()?;

    let best_index = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.feasible)
        .filter_map(|(i, c)| c.result.cost_per_tonne.map(|cost| (i, cost)))
        .fold(None, |best: Option<(usize, f64)>, (i, cost)| match best {
            Some((_, best_cost)) if cost >= best_cost => best,
            _ => Some((i, cost)),
        })
        .map(|(i, _)| i)
        .ok_or(AnalysisError::NoViableCandidate {
            what: "no catalogue engine yields a schedule that moves cargo",
        })?;

    debug!(
        engines = candidates.len(),
        best_bhp = candidates[best_index].engine.installed_bhp,
        "catalogue search complete"
    );

    Ok(JointOptimization {
        candidates,
        best_index,
    })
}

fn evaluate_engine(
    scenario: &Scenario,
    formation: ConvoyFormation,
    engine: EngineOption,
    grid: &[f64],
) -> AnalysisResult<JointCandidate> {
    let eng = &scenario.engineering;
    let ops = &scenario.operating;

    let mut schedule = [ops.cruise_speed_knots; MONTHS_PER_YEAR];
    for (i, &river_depth_m) in ops.monthly_river_depth_m.iter().enumerate() {
        let draft_m = operational_draft_m(river_depth_m, ops.keel_clearance_m, eng.design_draft_m);
        if draft_m <= 0.0 || draft_m < ops.min_navigable_draft_m || river_depth_m <= draft_m {
            // draft or depth parks the month regardless of speed
            continue;
        }
        schedule[i] = best_speed_for_month(scenario, formation, engine.installed_bhp, draft_m, river_depth_m, grid)?
            // no grid speed fits the rating; schedule the slowest one
            // and let the simulation park the month as power-limited
            .unwrap_or(grid[0]);
    }

    let result = simulate_year(
        scenario,
        &AnnualOptions {
            monthly_speed_knots: Some(schedule),
            installed_bhp: Some(engine.installed_bhp),
            pusher_basis: Some(PusherCostBasis::Catalogue {
                acquisition_cost: engine.acquisition_cost,
            }),
        },
    )?;
    // an engine that parks some months but serves the rest is still a
    // candidate; only an engine that moves nothing is out
    let feasible = result.viable;

    Ok(JointCandidate {
        engine,
        monthly_speed_knots: schedule,
        feasible,
        result,
    })
}

/// Highest grid speed this month can hold within the installed rating,
/// scanning from the top of the grid down.
fn best_speed_for_month(
    scenario: &Scenario,
    formation: ConvoyFormation,
    installed_bhp: f64,
    draft_m: f64,
    river_depth_m: f64,
    grid: &[f64],
) -> AnalysisResult<Option<f64>> {
    for &speed_knots in grid.iter().rev() {
        if speed_knots <= scenario.operating.current_speed_knots {
            break;
        }
        let demand = required_power(
            &scenario.engineering,
            formation,
            speed_knots,
            draft_m,
            river_depth_m,
        )
        .map_err(hv_sim::SimError::from)?;
        if demand.required_bhp <= installed_bhp * POWER_MARGIN {
            return Ok(Some(speed_knots));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::base_scenario;

    fn catalogue() -> Vec<EngineOption> {
        vec![
            EngineOption {
                installed_bhp: 1_500.0,
                acquisition_cost: 1_100_000.0,
            },
            EngineOption {
                installed_bhp: 3_000.0,
                acquisition_cost: 2_050_000.0,
            },
            EngineOption {
                installed_bhp: 6_000.0,
                acquisition_cost: 4_200_000.0,
            },
            EngineOption {
                installed_bhp: 9_000.0,
                acquisition_cost: 6_500_000.0,
            },
        ]
    }

    #[test]
    fn winner_never_demands_more_than_its_rating() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        let opt = optimize_design(&base_scenario(), &catalogue(), &speeds).unwrap();

        let best = opt.best();
        assert!(best.feasible);
        // every month that actually sails stays inside the rating
        for m in &best.result.months {
            if m.performance.trips > 0 {
                let check = m.performance.power.unwrap();
                assert!(check.sufficient, "month {} over the rating", m.month);
            }
        }
    }

    #[test]
    fn best_is_the_cheapest_feasible_engine() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        let opt = optimize_design(&base_scenario(), &catalogue(), &speeds).unwrap();
        let best_cost = opt.best().result.cost_per_tonne.unwrap();
        for c in opt.candidates.iter().filter(|c| c.feasible) {
            if let Some(cost) = c.result.cost_per_tonne {
                assert!(best_cost <= cost + 1e-9);
            }
        }
    }

    #[test]
    fn quoted_acquisition_cost_prices_the_pusher() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        let opt = optimize_design(&base_scenario(), &catalogue(), &speeds).unwrap();
        for c in &opt.candidates {
            assert!((c.result.capex.pusher_cost - c.engine.acquisition_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn bigger_engine_allows_equal_or_faster_months() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        let opt = optimize_design(&base_scenario(), &catalogue(), &speeds).unwrap();
        let small = &opt.candidates[0];
        let large = &opt.candidates[3];
        for i in 0..12 {
            assert!(large.monthly_speed_knots[i] >= small.monthly_speed_knots[i] - 1e-12);
        }
    }

    #[test]
    fn hopeless_catalogue_is_no_viable_candidate() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        let tiny = vec![EngineOption {
            installed_bhp: 1.0,
            acquisition_cost: 50_000.0,
        }];
        assert!(matches!(
            optimize_design(&base_scenario(), &tiny, &speeds),
            Err(AnalysisError::NoViableCandidate { .. })
        ));
    }

    #[test]
    fn empty_catalogue_is_rejected() {
        let speeds = SweepRange::new(3.0, 9.0, 13).unwrap();
        assert!(matches!(
            optimize_design(&base_scenario(), &[], &speeds),
            Err(AnalysisError::EmptyRange { .. })
        ));
    }
}
