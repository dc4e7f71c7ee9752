//! Error types for the simulation engine.

use hv_core::HvError;
use hv_cost::CostError;
use hv_vessel::VesselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Convoy geometry or power model failure. Carries the
    /// configuration-infeasible case, which aborts the whole evaluation.
    #[error(transparent)]
    Vessel(#[from] VesselError),

    #[error(transparent)]
    Cost(#[from] CostError),

    #[error(transparent)]
    Params(#[from] HvError),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// True when the failure means the scenario cannot be evaluated at
    /// all (as opposed to a bad call argument). Optimization loops use
    /// this to exclude a candidate instead of aborting the search.
    pub fn is_scenario_infeasible(&self) -> bool {
        matches!(
            self,
            SimError::Vessel(VesselError::ConfigurationInfeasible { .. })
        )
    }
}
