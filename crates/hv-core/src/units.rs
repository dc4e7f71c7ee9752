// hv-core/src/units.rs
//
// River-transport economics mixes marine, imperial and SI units: speeds
// arrive in knots, power in brake horsepower, distances in kilometres.
// Canonical convention across the workspace: lengths/drafts/depths in
// metres, distances in kilometres, times in hours, masses in tonnes
// (fuel in kg where the SFC demands it), power in BHP with kW only as
// an intermediate.

/// International knot, km/h.
pub const KNOT_TO_KMH: f64 = 1.852;

/// International knot, m/s.
pub const KNOT_TO_MPS: f64 = 0.514_444;

/// Mechanical horsepower per kilowatt.
pub const KW_TO_HP: f64 = 1.341_02;

/// Feet-to-metres factor kept from the Howe formulation.
pub const FOOT_M: f64 = 0.3048;

/// Fresh-water density, t/m3.
pub const FRESH_WATER_DENSITY_T_M3: f64 = 1.0;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const MONTHS_PER_YEAR: usize = 12;

#[inline]
pub fn knots_to_kmh(v: f64) -> f64 {
    v * KNOT_TO_KMH
}

#[inline]
pub fn knots_to_mps(v: f64) -> f64 {
    v * KNOT_TO_MPS
}

#[inline]
pub fn kw_to_hp(v: f64) -> f64 {
    v * KW_TO_HP
}

#[inline]
pub fn minutes_to_hours(v: f64) -> f64 {
    v / 60.0
}

#[inline]
pub fn days_to_hours(v: f64) -> f64 {
    v * HOURS_PER_DAY
}
