//! Error types for the analysis layer.

use hv_sim::SimError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("Empty or inverted range: {what}")]
    EmptyRange { what: &'static str },

    #[error("No viable candidate: {what}")]
    NoViableCandidate { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
