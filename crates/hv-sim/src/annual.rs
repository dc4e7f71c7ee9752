//! Annual simulation: twelve monthly periods folded into one year.
//!
//! The river depth series drives everything seasonal. Each month is an
//! independent [`crate::trip::simulate_period`] call at that month's
//! operational draft; the year is a pure fold over the twelve results.
//! Idle months keep their share of the operating days in the calendar,
//! they simply contribute zero cargo and zero fuel.

use hv_core::{Scenario, MONTHS_PER_YEAR};
use hv_cost::{annualized_capex, fixed_opex, PusherCostBasis};
use hv_vessel::{barge_lightweight_t, operational_draft_m, required_power, solve_formation};
use tracing::debug;

use crate::emissions::emissions_from_fuel;
use crate::error::SimResult;
use crate::result::{MonthlyOperatingState, SimulationResult};
use crate::trip::{simulate_period, PeriodInput};

/// Knobs the optimization layers turn; plain annual runs use the
/// default (cruise speed every month, installed power sized in-house,
/// pusher cost from the power regression).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnnualOptions {
    /// Per-month speed schedule; `None` means cruise speed year round
    pub monthly_speed_knots: Option<[f64; 12]>,
    /// Installed main-engine rating; `None` sizes it to the peak
    /// monthly demand of the schedule
    pub installed_bhp: Option<f64>,
    /// Pusher acquisition cost basis; `None` uses the power regression
    /// on the installed rating
    pub pusher_basis: Option<PusherCostBasis>,
}

/// Simulate one full year of operation over the monthly depth series.
pub fn simulate_year(scenario: &Scenario, options: &AnnualOptions) -> SimResult<SimulationResult> {
    scenario.validate()?;
    let eng = &scenario.engineering;
    let ops = &scenario.operating;
    let fin = &scenario.financial;

    let formation = solve_formation(eng)?;

    let speed_for_month =
        |i: usize| options.monthly_speed_knots.map_or(ops.cruise_speed_knots, |s| s[i]);

    // Size the engine for the worst month of the schedule. The peak is
    // not necessarily the deepest month: the shallow-water depth term
    // grows faster than the draft terms shrink, so a low-water month at
    // reduced draft can demand the most power.
    let installed_bhp = match options.installed_bhp {
        Some(bhp) => bhp,
        None => {
            let mut peak = 0.0f64;
            for (i, &river_depth_m) in ops.monthly_river_depth_m.iter().enumerate() {
                let draft_m =
                    operational_draft_m(river_depth_m, ops.keel_clearance_m, eng.design_draft_m);
                let speed_knots = speed_for_month(i);
                if draft_m <= 0.0
                    || draft_m < ops.min_navigable_draft_m
                    || river_depth_m <= draft_m
                    || speed_knots <= ops.current_speed_knots
                {
                    // month never sails; it puts no demand on the engine
                    continue;
                }
                let demand = required_power(eng, formation, speed_knots, draft_m, river_depth_m)?;
                peak = peak.max(demand.required_bhp);
            }
            peak
        }
    };

    let days_per_month = ops.operating_days_per_year / MONTHS_PER_YEAR as f64;

    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    for (i, &river_depth_m) in ops.monthly_river_depth_m.iter().enumerate() {
        let draft_m = operational_draft_m(river_depth_m, ops.keel_clearance_m, eng.design_draft_m);
        let performance = simulate_period(
            eng,
            ops,
            fin,
            formation,
            &PeriodInput {
                draft_m,
                river_depth_m,
                speed_knots: speed_for_month(i),
                available_days: days_per_month,
                installed_bhp: Some(installed_bhp),
            },
        )?;
        months.push(MonthlyOperatingState {
            month: i as u32 + 1,
            river_depth_m,
            performance,
        });
    }

    let annual_cargo_t: f64 = months.iter().map(|m| m.performance.cargo_t).sum();
    let annual_trips: u32 = months.iter().map(|m| m.performance.trips).sum();
    let total_fuel_kg: f64 = months.iter().map(|m| m.performance.fuel_kg).sum();
    let fuel_cost: f64 = months.iter().map(|m| m.performance.fuel_cost).sum();
    let variable_cost: f64 = months.iter().map(|m| m.performance.variable_cost).sum();
    let peak_required_bhp = months
        .iter()
        .filter_map(|m| m.performance.required_bhp)
        .fold(0.0, f64::max);
    let power_sufficient = months
        .iter()
        .all(|m| m.performance.power.map_or(true, |p| p.sufficient));

    let pusher_basis = options
        .pusher_basis
        .unwrap_or(PusherCostBasis::RegressionOnPower { installed_bhp });
    let lightweight_t = barge_lightweight_t(eng.barge_length_m, eng.barge_beam_m, eng.barge_depth_m);
    let capex = annualized_capex(pusher_basis, lightweight_t, formation.barge_count(), fin)?;
    let fixed = fixed_opex(capex.total_investment, fin)?;

    let total_annual_cost = capex.annual_capital_cost + fixed.total + variable_cost;
    let cost_per_tonne = (annual_cargo_t > 0.0).then(|| total_annual_cost / annual_cargo_t);
    let cost_per_tonne_km =
        (annual_cargo_t > 0.0).then(|| total_annual_cost / (annual_cargo_t * ops.route_distance_km));

    let emissions =
        emissions_from_fuel(total_fuel_kg, annual_cargo_t, fin.co2_factor_kg_per_kg_fuel);

    debug!(
        barges = formation.barge_count(),
        installed_bhp,
        annual_trips,
        annual_cargo_t,
        total_annual_cost,
        "annual simulation complete"
    );

    Ok(SimulationResult {
        formation,
        capex,
        fixed_opex: fixed,
        variable_cost,
        fuel_cost,
        total_annual_cost,
        annual_cargo_t,
        annual_trips,
        total_fuel_kg,
        installed_bhp,
        peak_required_bhp,
        power_sufficient,
        viable: annual_cargo_t > 0.0,
        cost_per_tonne,
        cost_per_tonne_km,
        emissions,
        months,
    })
}
