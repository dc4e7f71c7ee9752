//! Single-period simulation: one fixed draft, one window of days.
//!
//! The atomic, stateless calculation everything else composes. A period
//! that cannot navigate (draft below the minimum, current faster than
//! the boat) is a zero-trip outcome, not an error; only a convoy that
//! cannot exist at all (formation) or nonsense arguments abort the call.

use hv_core::{
    days_to_hours, knots_to_kmh, minutes_to_hours, EngineeringParameters, FinancialParameters,
    OperatingParameters, Scenario,
};
use hv_cost::{
    annualized_capex, auxiliary_bhp, fixed_opex, fuel_cost, fuel_mass_kg, PusherCostBasis,
};
use hv_vessel::{
    barge_cargo_capacity_t, barge_displaced_volume_m3, barge_lightweight_t, required_power,
    solve_formation, ConvoyFormation,
};

use crate::emissions::emissions_from_fuel;
use crate::error::{SimError, SimResult};
use crate::result::{MonthStatus, PeriodPerformance, SimulationResult};

/// Inputs that vary per period; everything else comes from the
/// parameter records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodInput {
    /// Operational draft for the period, m
    pub draft_m: f64,
    /// Channel depth the draft was derived from, m
    pub river_depth_m: f64,
    /// Speed through water, knots
    pub speed_knots: f64,
    /// Days available in the window
    pub available_days: f64,
    /// Installed main-engine rating to check demand against, if any
    pub installed_bhp: Option<f64>,
}

/// Simulate one operating period for an already-resolved formation.
pub fn simulate_period(
    eng: &EngineeringParameters,
    ops: &OperatingParameters,
    fin: &FinancialParameters,
    formation: ConvoyFormation,
    period: &PeriodInput,
) -> SimResult<PeriodPerformance> {
    if period.available_days < 0.0 {
        return Err(SimError::InvalidArg {
            what: "available days cannot be negative",
        });
    }

    let draft_m = period.draft_m.min(eng.design_draft_m);

    // No navigable draft, or no water left under the keel (draft at the
    // channel depth, where the power model diverges): the month parks
    if draft_m <= 0.0
        || draft_m < ops.min_navigable_draft_m
        || period.river_depth_m <= draft_m
    {
        return Ok(PeriodPerformance::idle(
            MonthStatus::BelowMinimumDraft,
            draft_m.max(0.0),
            period.speed_knots,
        ));
    }

    // Upstream leg needs speed through water above the current
    if period.speed_knots <= ops.current_speed_knots {
        return Ok(PeriodPerformance::idle(
            MonthStatus::CurrentExceedsSpeed,
            draft_m,
            period.speed_knots,
        ));
    }

    let barge_count = f64::from(formation.barge_count());

    // Cargo capacity at this draft (Archimedes)
    let lightweight_t = barge_lightweight_t(eng.barge_length_m, eng.barge_beam_m, eng.barge_depth_m);
    let volume_m3 = barge_displaced_volume_m3(
        eng.barge_length_m,
        eng.barge_beam_m,
        draft_m,
        eng.block_coefficient,
    );
    let capacity_per_trip_t = barge_cargo_capacity_t(volume_m3, lightweight_t) * barge_count;

    // Round-trip time: asymmetric legs over the ground, terminal
    // handling at both ends, locks and formation maneuvers
    let downstream_kmh = knots_to_kmh(period.speed_knots + ops.current_speed_knots);
    let upstream_kmh = knots_to_kmh(period.speed_knots - ops.current_speed_knots);
    let navigation_h =
        ops.route_distance_km / downstream_kmh + ops.route_distance_km / upstream_kmh;

    let berths = f64::from(ops.berths);
    let port_h = capacity_per_trip_t / (ops.loading_rate_t_per_h * berths)
        + capacity_per_trip_t / (ops.unloading_rate_t_per_h * berths);

    let ancillary_h =
        minutes_to_hours(ops.lock_time_min + ops.maneuver_time_per_barge_min * barge_count);

    let round_trip_hours = navigation_h + port_h + ancillary_h;

    let demand = required_power(
        eng,
        formation,
        period.speed_knots,
        draft_m,
        period.river_depth_m,
    )?;
    let power = period.installed_bhp.map(|bhp| demand.check_against(bhp));

    // A speed the engine cannot hold is not sailed on paper power
    if let Some(check) = power {
        if !check.sufficient {
            return Ok(PeriodPerformance {
                status: MonthStatus::PowerLimited,
                operational_draft_m: draft_m,
                speed_knots: period.speed_knots,
                capacity_per_trip_t,
                round_trip_hours,
                trips: 0,
                cargo_t: 0.0,
                fuel_kg: 0.0,
                fuel_cost: 0.0,
                variable_cost: 0.0,
                required_bhp: Some(demand.required_bhp),
                power,
            });
        }
    }

    // A trip only counts when completed inside the window
    let available_h = days_to_hours(period.available_days);
    let trips = (available_h / round_trip_hours).floor() as u32;

    if trips == 0 {
        return Ok(PeriodPerformance {
            status: MonthStatus::NoCompleteTrip,
            operational_draft_m: draft_m,
            speed_knots: period.speed_knots,
            capacity_per_trip_t,
            round_trip_hours,
            trips: 0,
            cargo_t: 0.0,
            fuel_kg: 0.0,
            fuel_cost: 0.0,
            variable_cost: 0.0,
            required_bhp: Some(demand.required_bhp),
            power,
        });
    }

    // Main engines burn while moving and maneuvering; generators burn
    // over the whole cycle, port stays included
    let trips_f = f64::from(trips);
    let main_engine_h = (navigation_h + ancillary_h) * trips_f;
    let aux_engine_h = round_trip_hours * trips_f;

    let main_kg = fuel_mass_kg(demand.required_bhp, main_engine_h, fin.sfc_kg_per_hp_h);
    let aux_kg = fuel_mass_kg(
        auxiliary_bhp(demand.required_bhp),
        aux_engine_h,
        fin.sfc_kg_per_hp_h,
    );
    let fuel_kg = main_kg + aux_kg;
    let fuel_cost_value = fuel_cost(fuel_kg, fin)?;
    let variable_cost = fuel_cost_value * (1.0 + fin.admin_overhead_rate);

    Ok(PeriodPerformance {
        status: MonthStatus::Operated,
        operational_draft_m: draft_m,
        speed_knots: period.speed_knots,
        capacity_per_trip_t,
        round_trip_hours,
        trips,
        cargo_t: capacity_per_trip_t * trips_f,
        fuel_kg,
        fuel_cost: fuel_cost_value,
        variable_cost,
        required_bhp: Some(demand.required_bhp),
        power,
    })
}

/// Full cost picture of one static scenario: one draft, one window,
/// installed power sized exactly to the demand of that condition.
pub fn simulate_static(
    scenario: &Scenario,
    draft_m: f64,
    river_depth_m: f64,
    available_days: f64,
) -> SimResult<SimulationResult> {
    scenario.validate()?;
    let eng = &scenario.engineering;
    let ops = &scenario.operating;
    let fin = &scenario.financial;

    let formation = solve_formation(eng)?;

    let performance = simulate_period(
        eng,
        ops,
        fin,
        formation,
        &PeriodInput {
            draft_m,
            river_depth_m,
            speed_knots: ops.cruise_speed_knots,
            available_days,
            installed_bhp: None,
        },
    )?;

    let installed_bhp = performance.required_bhp.unwrap_or(0.0);
    let lightweight_t = barge_lightweight_t(eng.barge_length_m, eng.barge_beam_m, eng.barge_depth_m);
    let capex = annualized_capex(
        PusherCostBasis::RegressionOnPower { installed_bhp },
        lightweight_t,
        formation.barge_count(),
        fin,
    )?;
    let fixed = fixed_opex(capex.total_investment, fin)?;

    let total_annual_cost = capex.annual_capital_cost + fixed.total + performance.variable_cost;
    let cargo_t = performance.cargo_t;

    let cost_per_tonne = (cargo_t > 0.0).then(|| total_annual_cost / cargo_t);
    let cost_per_tonne_km =
        (cargo_t > 0.0).then(|| total_annual_cost / (cargo_t * ops.route_distance_km));

    let emissions = emissions_from_fuel(performance.fuel_kg, cargo_t, fin.co2_factor_kg_per_kg_fuel);

    Ok(SimulationResult {
        formation,
        capex,
        fixed_opex: fixed,
        variable_cost: performance.variable_cost,
        fuel_cost: performance.fuel_cost,
        total_annual_cost,
        annual_cargo_t: cargo_t,
        annual_trips: performance.trips,
        total_fuel_kg: performance.fuel_kg,
        installed_bhp,
        peak_required_bhp: installed_bhp,
        power_sufficient: true,
        viable: cargo_t > 0.0,
        cost_per_tonne,
        cost_per_tonne_km,
        emissions,
        months: Vec::new(),
    })
}
