//! hv-cost: construction cost, capital annualization and operating cost.
//!
//! Two independent sub-models in the manner of the engineering-economics
//! literature: CAPEX (parametric construction cost regressions plus the
//! capital recovery factor) and OPEX (fixed crew/insurance/maintenance
//! provisions plus fuel as the only variable cost driver).

pub mod capex;
pub mod error;
pub mod opex;

pub use capex::{
    annualized_capex, barge_construction_cost, capital_recovery_factor, pusher_construction_cost,
    CapexBreakdown, PusherCostBasis,
};
pub use error::{CostError, CostResult};
pub use opex::{auxiliary_bhp, fixed_opex, fuel_cost, fuel_mass_kg, FixedOpex, AUX_LOAD_FACTOR};
