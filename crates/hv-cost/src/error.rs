//! Error types for cost model operations.

use hv_core::HvError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type CostResult<T> = Result<T, CostError>;

impl From<CostError> for HvError {
    fn from(e: CostError) -> Self {
        match e {
            CostError::InvalidArg { what } => HvError::InvalidArg { what },
            CostError::NonPhysical { what } => HvError::InvalidArg { what },
        }
    }
}
