//! Error types for vessel model operations.

use hv_core::HvError;
use thiserror::Error;

/// Errors that can occur while resolving convoy geometry or power.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VesselError {
    /// No arrangement of barges fits the waterway. Fatal for the whole
    /// evaluation; never degraded into a smaller formation silently.
    #[error(
        "No convoy arrangement fits the channel \
         (channel width {channel_width_m} m, barge beam {barge_beam_m} m, \
         max convoy length {max_convoy_length_m} m, barge length {barge_length_m} m)"
    )]
    ConfigurationInfeasible {
        channel_width_m: f64,
        barge_beam_m: f64,
        max_convoy_length_m: f64,
        barge_length_m: f64,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type VesselResult<T> = Result<T, VesselError>;

impl From<VesselError> for HvError {
    fn from(e: VesselError) -> Self {
        match e {
            VesselError::ConfigurationInfeasible { .. } => HvError::Invariant {
                what: "convoy configuration infeasible",
            },
            VesselError::NonPhysical { what } => HvError::InvalidArg { what },
            VesselError::InvalidArg { what } => HvError::InvalidArg { what },
        }
    }
}
