//! hv-vessel: physical models of the barge convoy.
//!
//! Pure functions only: geometry in, arrangement/capacity/power out.
//! No shared state; every call is a fresh transformation of its inputs.

pub mod error;
pub mod formation;
pub mod hydrostatics;
pub mod resistance;

pub use error::{VesselError, VesselResult};
pub use formation::{solve_formation, ConvoyFormation};
pub use hydrostatics::{
    barge_cargo_capacity_t, barge_displaced_volume_m3, barge_lightweight_t, operational_draft_m,
};
pub use resistance::{required_power, PowerCheck, PowerDemand};
