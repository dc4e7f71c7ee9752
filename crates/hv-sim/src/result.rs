//! Simulation output records.
//!
//! Every record here is constructed once and never mutated; a fresh one
//! is returned per call. Unit costs are `Option<f64>`: `None` means the
//! period moved no cargo and the metric is undefined, which is a
//! reportable outcome, never a division error and never a fake zero.

use hv_cost::{CapexBreakdown, FixedOpex};
use hv_vessel::{ConvoyFormation, PowerCheck};
use serde::{Deserialize, Serialize};

use crate::emissions::EmissionsSummary;

/// Why a period did or did not move cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStatus {
    /// Normal operation, at least one complete round trip
    Operated,
    /// Operational draft below the navigable minimum, or no water left
    /// under the keel; fleet idle
    BelowMinimumDraft,
    /// Upstream leg impossible: speed through water does not exceed the
    /// current
    CurrentExceedsSpeed,
    /// Navigable, but the window was too short for one complete trip
    NoCompleteTrip,
    /// The installed rating cannot hold the requested speed at this
    /// draft; the period is parked rather than sailed on paper power
    PowerLimited,
}

/// Physical and variable-cost performance of one operating period at
/// one fixed draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPerformance {
    pub status: MonthStatus,
    pub operational_draft_m: f64,
    pub speed_knots: f64,
    /// Cargo capacity of the whole convoy at this draft, t
    pub capacity_per_trip_t: f64,
    pub round_trip_hours: f64,
    pub trips: u32,
    pub cargo_t: f64,
    pub fuel_kg: f64,
    pub fuel_cost: f64,
    /// Fuel plus variable administrative overhead
    pub variable_cost: f64,
    /// Brake power demanded at this draft/speed; None when the period
    /// never navigates (no draft to compute it at)
    pub required_bhp: Option<f64>,
    /// Demand vs installed rating, when an installed rating was given
    pub power: Option<PowerCheck>,
}

impl PeriodPerformance {
    /// An idle period: contributes zeros to every aggregate.
    pub(crate) fn idle(status: MonthStatus, draft_m: f64, speed_knots: f64) -> Self {
        Self {
            status,
            operational_draft_m: draft_m,
            speed_knots,
            capacity_per_trip_t: 0.0,
            round_trip_hours: 0.0,
            trips: 0,
            cargo_t: 0.0,
            fuel_kg: 0.0,
            fuel_cost: 0.0,
            variable_cost: 0.0,
            required_bhp: None,
            power: None,
        }
    }
}

/// One calendar month inside an annual simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOperatingState {
    /// 1-based calendar month
    pub month: u32,
    pub river_depth_m: f64,
    pub performance: PeriodPerformance,
}

/// Complete cost/performance picture of one scenario evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub formation: ConvoyFormation,
    pub capex: CapexBreakdown,
    pub fixed_opex: FixedOpex,
    /// Fuel cost plus variable administrative overhead, currency/year
    pub variable_cost: f64,
    pub fuel_cost: f64,
    pub total_annual_cost: f64,
    pub annual_cargo_t: f64,
    pub annual_trips: u32,
    pub total_fuel_kg: f64,
    pub installed_bhp: f64,
    /// Highest brake-power demand seen across the evaluated periods
    pub peak_required_bhp: f64,
    /// Installed power covered the requested speed in every period
    pub power_sufficient: bool,
    /// At least one period moved cargo
    pub viable: bool,
    pub cost_per_tonne: Option<f64>,
    pub cost_per_tonne_km: Option<f64>,
    pub emissions: EmissionsSummary,
    /// Month-by-month detail (empty for single-period evaluations)
    pub months: Vec<MonthlyOperatingState>,
}

impl SimulationResult {
    /// Annual cost of everything that does not vary with trips:
    /// annualized capital plus fixed operating provisions.
    pub fn fixed_annual_cost(&self) -> f64 {
        self.capex.annual_capital_cost + self.fixed_opex.total
    }

    /// Variable cost per tonne actually moved; None when no cargo moved.
    pub fn variable_cost_per_tonne(&self) -> Option<f64> {
        if self.annual_cargo_t > 0.0 {
            Some(self.variable_cost / self.annual_cargo_t)
        } else {
            None
        }
    }
}
