//! Resistance and propulsion power model.
//!
//! Howe (1967) empirical pushed-convoy formulation as adapted by
//! Padovezi (1997, 2003) for shallow, laterally restricted channels:
//!
//! ```text
//! Pe (kW) = 0.14426 * F * e^(0.445/(h - T)) * (T/0.3048)^(0.6 + 15.24/(W - Bc))
//!           * Lc^0.38 * Bc^1.19 * V^3
//! ```
//!
//! with an additive `1.83 * V^3` correction for near-empty barges
//! (T < 0.80 m). The depth term grows as the draft approaches the
//! channel depth, which is what makes shallow months expensive to run
//! fast. Output is brake power after the overall propulsive efficiency.

use hv_core::{ensure_finite, knots_to_mps, kw_to_hp, EngineeringParameters, FOOT_M};
use serde::{Deserialize, Serialize};

use crate::error::{VesselError, VesselResult};
use crate::formation::ConvoyFormation;

/// Howe leading coefficient.
const HOWE_COEFF: f64 = 0.144_26;
/// Depth-effect exponent numerator, m.
const DEPTH_EFFECT_M: f64 = 0.445;
/// Lateral-restriction exponent terms.
const LATERAL_EXP_BASE: f64 = 0.6;
const LATERAL_EXP_SCALE_M: f64 = 15.24;
/// Empty-barge correction applies below this draft, m.
const EMPTY_BARGE_DRAFT_M: f64 = 0.80;
const EMPTY_BARGE_COEFF: f64 = 1.83;

/// Form factor by arrangement (Padovezi 2003, table 4.1). Arrangements
/// outside the table take the conservative wide-formation value.
fn form_factor(formation: ConvoyFormation) -> f64 {
    match (formation.rows, formation.columns) {
        (1, 1) => 0.040,
        (1, 2) => 0.050,
        (2, 1) => 0.043,
        (1, 3) => 0.040,
        (2, 2) => 0.045,
        (2, 3) => 0.058,
        (3, 2) => 0.070,
        _ => 0.070,
    }
}

/// Propulsion power demanded by one convoy at a given speed and draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerDemand {
    /// Effective (towrope) power, kW
    pub effective_kw: f64,
    /// Brake power after propulsive efficiency, BHP
    pub required_bhp: f64,
}

/// Outcome of comparing demand against an installed-power ceiling.
/// Insufficiency is data, not an error: the design phase treats it as
/// fatal, the operating phase as a cap on achievable speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCheck {
    pub required_bhp: f64,
    pub installed_bhp: f64,
    pub sufficient: bool,
    /// Demand in excess of the installed rating, BHP (0 when sufficient)
    pub shortfall_bhp: f64,
}

impl PowerDemand {
    /// Compare against an installed rating. A 0.1 % tolerance absorbs
    /// float noise at the boundary.
    pub fn check_against(&self, installed_bhp: f64) -> PowerCheck {
        let sufficient = self.required_bhp <= installed_bhp * 1.001;
        PowerCheck {
            required_bhp: self.required_bhp,
            installed_bhp,
            sufficient,
            shortfall_bhp: if sufficient {
                0.0
            } else {
                self.required_bhp - installed_bhp
            },
        }
    }
}

/// Compute the brake power required to push `formation` at
/// `speed_knots` through water, at operational draft `draft_m` in a
/// channel of depth `depth_m`.
///
/// # Errors
/// `NonPhysical` when the draft reaches the channel depth or the convoy
/// beam reaches the channel width (the empirical terms diverge there);
/// `InvalidArg` on non-positive speed or draft.
pub fn required_power(
    eng: &EngineeringParameters,
    formation: ConvoyFormation,
    speed_knots: f64,
    draft_m: f64,
    depth_m: f64,
) -> VesselResult<PowerDemand> {
    if speed_knots <= 0.0 {
        return Err(VesselError::InvalidArg {
            what: "speed must be positive",
        });
    }
    if draft_m <= 0.0 {
        return Err(VesselError::InvalidArg {
            what: "draft must be positive",
        });
    }
    if depth_m <= draft_m {
        return Err(VesselError::NonPhysical {
            what: "channel depth must exceed the operational draft",
        });
    }

    let convoy_length_m = formation.length_m(eng.barge_length_m);
    let convoy_beam_m = formation.beam_m(eng.barge_beam_m);
    let lateral_clearance_m = eng.channel_width_m - convoy_beam_m;
    if lateral_clearance_m <= 0.0 {
        return Err(VesselError::NonPhysical {
            what: "convoy beam must be smaller than the channel width",
        });
    }

    let speed_mps = knots_to_mps(speed_knots);

    let depth_term = (DEPTH_EFFECT_M / (depth_m - draft_m)).exp();
    let lateral_exponent = LATERAL_EXP_BASE + LATERAL_EXP_SCALE_M / lateral_clearance_m;
    let restriction_term = (draft_m / FOOT_M).powf(lateral_exponent);

    let mut effective_kw = HOWE_COEFF
        * form_factor(formation)
        * depth_term
        * restriction_term
        * convoy_length_m.powf(0.38)
        * convoy_beam_m.powf(1.19)
        * speed_mps.powi(3);

    // Howe underestimates near-empty convoys
    if draft_m < EMPTY_BARGE_DRAFT_M {
        effective_kw += EMPTY_BARGE_COEFF * speed_mps.powi(3);
    }

    let effective_kw = ensure_finite(effective_kw, "effective power")
        .map_err(|_| VesselError::NonPhysical {
            what: "effective power is not finite",
        })?;

    let required_bhp = kw_to_hp(effective_kw) / eng.propulsive_efficiency;

    Ok(PowerDemand {
        effective_kw,
        required_bhp,
    })
}
