//! hv-analysis: optimization and decision-support studies over the
//! simulation engine.
//!
//! Every study here is a pure function of a scenario: it runs the
//! annual simulation at systematically varied inputs and reports the
//! full table alongside the winner, so a reader can audit why the
//! winner won. Sweeps are embarrassingly parallel and fan out with
//! rayon.

pub mod breakeven;
pub mod error;
pub mod fleet;
pub mod joint;
pub mod profitability;
pub mod sensitivity;
pub mod speed;
pub mod sweep;

#[cfg(test)]
pub(crate) mod fixtures;

pub use breakeven::{break_even, BreakEvenOutcome};
pub use error::{AnalysisError, AnalysisResult};
pub use fleet::{size_fleet, FleetCandidate, FleetPlan, FleetSizing};
pub use joint::{optimize_design, JointCandidate, JointOptimization};
pub use profitability::{profitability_matrix, ProfitabilityMatrix};
pub use sensitivity::{
    sensitivity_analysis, SensitivityEntry, SensitivityReport, TrackedParameter,
};
pub use speed::{optimize_speed, SpeedCandidate, SpeedOptimization};
pub use sweep::SweepRange;
