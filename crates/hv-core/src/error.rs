use thiserror::Error;

pub type HvResult<T> = Result<T, HvError>;

#[derive(Error, Debug)]
pub enum HvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
