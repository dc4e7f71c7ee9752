//! hv-core: stable foundation for hydrovia.
//!
//! Contains:
//! - units (conversion constants + helpers between marine and SI units)
//! - numeric (Real + tolerances + float helpers)
//! - params (scenario parameter records shared by every crate)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HvError, HvResult};
pub use numeric::*;
pub use params::*;
pub use units::*;
