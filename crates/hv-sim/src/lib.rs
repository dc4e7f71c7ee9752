//! hv-sim: the deterministic convoy simulation engine.
//!
//! [`trip`] is the atomic, stateless calculation: one fixed draft, one
//! fixed window of operating days. [`annual`] maps it over the twelve
//! calendar months of a river-depth series and folds the results into
//! one year. [`emissions`] derives CO2 figures from the same fuel mass
//! the cost side used, so cost and emissions can never disagree for a
//! scenario.

pub mod annual;
pub mod emissions;
pub mod error;
pub mod result;
pub mod trip;

pub use annual::{simulate_year, AnnualOptions};
pub use emissions::{emissions_from_fuel, EmissionsSummary};
pub use error::{SimError, SimResult};
pub use result::{MonthStatus, MonthlyOperatingState, PeriodPerformance, SimulationResult};
pub use trip::{simulate_period, simulate_static, PeriodInput};
