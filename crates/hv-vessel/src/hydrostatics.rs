//! Barge hydrostatics: lightweight, displacement and cargo capacity.

use hv_core::FRESH_WATER_DENSITY_T_M3;

/// Lightweight regression coefficients, calibrated on approved river
/// barge designs (cubic number L*B*H/1000 as the explanatory variable).
const LIGHTWEIGHT_INTERCEPT_T: f64 = 18.858_037_300_571;
const LIGHTWEIGHT_SLOPE_T: f64 = 112.865_401_771_503;

/// Estimated lightweight of one barge, tonnes.
pub fn barge_lightweight_t(length_m: f64, beam_m: f64, depth_m: f64) -> f64 {
    let cubic_number = length_m * beam_m * depth_m / 1000.0;
    LIGHTWEIGHT_INTERCEPT_T + LIGHTWEIGHT_SLOPE_T * cubic_number
}

/// Displaced hull volume at a given draft, m3.
pub fn barge_displaced_volume_m3(
    length_m: f64,
    beam_m: f64,
    draft_m: f64,
    block_coefficient: f64,
) -> f64 {
    length_m * beam_m * draft_m * block_coefficient
}

/// Net cargo deadweight of one barge at a given displaced volume, tonnes.
///
/// Archimedes: total displacement equals lightweight plus cargo. Clamped
/// at zero when the draft cannot even float the empty hull.
pub fn barge_cargo_capacity_t(displaced_volume_m3: f64, lightweight_t: f64) -> f64 {
    let displacement_t = displaced_volume_m3 * FRESH_WATER_DENSITY_T_M3;
    (displacement_t - lightweight_t).max(0.0)
}

/// Draft the convoy can actually use in a given month, m.
///
/// Limited by the river (depth minus under-keel clearance) and by the
/// hull structure (design draft); never negative.
pub fn operational_draft_m(
    river_depth_m: f64,
    keel_clearance_m: f64,
    design_draft_m: f64,
) -> f64 {
    let river_allows = river_depth_m - keel_clearance_m;
    river_allows.min(design_draft_m).max(0.0)
}
