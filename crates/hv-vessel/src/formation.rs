//! Convoy arrangement solver.
//!
//! Given barge dimensions and the waterway restrictions, determines how
//! many barges can be pushed as one rigid unit: `columns` barges in line
//! ahead × `rows` barges abreast.

use hv_core::EngineeringParameters;
use serde::{Deserialize, Serialize};

use crate::error::{VesselError, VesselResult};

/// Inscription rule for the tightest bend: the rigid convoy length must
/// not exceed the curvature radius divided by this factor.
pub const CURVE_INSCRIPTION_DIVISOR: f64 = 5.0;

/// Practical formation caps for pushed convoys on restricted waterways.
pub const MAX_COLUMNS: u32 = 7;
pub const MAX_ROWS: u32 = 5;

/// A rigid pushed-convoy arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvoyFormation {
    /// Barges abreast (across the channel)
    pub rows: u32,
    /// Barges in line ahead (along the channel)
    pub columns: u32,
}

impl ConvoyFormation {
    pub fn barge_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Overall beam of the rigid unit, m.
    pub fn beam_m(&self, barge_beam_m: f64) -> f64 {
        f64::from(self.rows) * barge_beam_m
    }

    /// Overall length of the rigid unit (pusher excluded), m.
    pub fn length_m(&self, barge_length_m: f64) -> f64 {
        f64::from(self.columns) * barge_length_m
    }
}

/// Solve for the largest arrangement that fits the waterway.
///
/// Candidates are enumerated deterministically in increasing barge-count
/// order; among feasible candidates the maximal count wins, with ties
/// broken in favour of the longer, narrower formation (directionally
/// more stable than a wide, short one). The width constraint is strict:
/// a convoy as wide as the channel has no lateral clearance and cannot
/// be powered through it.
///
/// # Errors
/// [`VesselError::ConfigurationInfeasible`] when not even a single barge
/// fits the channel width and bend radius.
pub fn solve_formation(eng: &EngineeringParameters) -> VesselResult<ConvoyFormation> {
    let max_convoy_length_m = eng.curvature_radius_m / CURVE_INSCRIPTION_DIVISOR;

    let mut best: Option<ConvoyFormation> = None;

    for rows in 1..=MAX_ROWS {
        for columns in 1..=MAX_COLUMNS {
            let candidate = ConvoyFormation { rows, columns };
            // strict: the power model needs positive lateral clearance
            let fits_width = candidate.beam_m(eng.barge_beam_m) < eng.channel_width_m;
            let fits_curve = candidate.length_m(eng.barge_length_m) <= max_convoy_length_m;
            if !(fits_width && fits_curve) {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    candidate.barge_count() > b.barge_count()
                        || (candidate.barge_count() == b.barge_count()
                            && candidate.columns > b.columns)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    best.ok_or(VesselError::ConfigurationInfeasible {
        channel_width_m: eng.channel_width_m,
        barge_beam_m: eng.barge_beam_m,
        max_convoy_length_m,
        barge_length_m: eng.barge_length_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eng(channel_width_m: f64, curvature_radius_m: f64) -> EngineeringParameters {
        EngineeringParameters {
            barge_length_m: 60.96,
            barge_beam_m: 10.67,
            barge_depth_m: 4.27,
            design_draft_m: 3.66,
            block_coefficient: 0.90,
            channel_width_m,
            curvature_radius_m,
            propulsive_efficiency: 0.50,
        }
    }

    #[test]
    fn wide_channel_hits_the_caps() {
        // 1 km wide, 10 km radius: nothing restricts the formation
        let formation = solve_formation(&eng(1000.0, 10_000.0)).unwrap();
        assert_eq!(formation.rows, MAX_ROWS);
        assert_eq!(formation.columns, MAX_COLUMNS);
    }

    #[test]
    fn narrow_channel_limits_rows() {
        // Two beams fit, three do not
        let formation = solve_formation(&eng(2.5 * 10.67, 10_000.0)).unwrap();
        assert_eq!(formation.rows, 2);
        assert_eq!(formation.columns, MAX_COLUMNS);
    }

    #[test]
    fn tight_bend_limits_columns() {
        // radius/5 = 160 m: two barge lengths (121.9 m) fit, three do not
        let formation = solve_formation(&eng(1000.0, 800.0)).unwrap();
        assert_eq!(formation.columns, 2);
        assert_eq!(formation.rows, MAX_ROWS);
    }

    #[test]
    fn exact_multiple_width_keeps_lateral_clearance() {
        // Channel exactly two beams wide: two abreast would touch both
        // banks, so only one row is admissible
        let formation = solve_formation(&eng(2.0 * 10.67, 10_000.0)).unwrap();
        assert_eq!(formation.rows, 1);
        assert!(formation.beam_m(10.67) < 2.0 * 10.67);
    }

    #[test]
    fn channel_narrower_than_one_barge_is_infeasible() {
        let err = solve_formation(&eng(9.0, 10_000.0)).unwrap_err();
        assert!(matches!(
            err,
            VesselError::ConfigurationInfeasible { .. }
        ));
    }

    #[test]
    fn solver_is_deterministic() {
        let a = solve_formation(&eng(100.0, 800.0)).unwrap();
        let b = solve_formation(&eng(100.0, 800.0)).unwrap();
        assert_eq!(a, b);
    }
}
