//! Scenario parameter records.
//!
//! Every simulation or optimization call consumes a [`Scenario`] built
//! from three immutable records: engineering (hull and waterway
//! geometry), operating (speeds, dwell times, river depth series) and
//! financial (capital, labour, fuel). Nothing here is ever mutated after
//! construction; searches clone and perturb their own copies.

use serde::{Deserialize, Serialize};

use crate::error::{HvError, HvResult};
use crate::numeric::{ensure_finite, ensure_positive};
use crate::units::MONTHS_PER_YEAR;

/// Hull and waterway geometry, fixed per scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineeringParameters {
    /// Barge length overall, m
    pub barge_length_m: f64,
    /// Barge moulded beam, m
    pub barge_beam_m: f64,
    /// Barge moulded depth, m
    pub barge_depth_m: f64,
    /// Structural maximum draft, m
    pub design_draft_m: f64,
    /// Block coefficient (flat-bottomed barges run 0.85-0.95)
    pub block_coefficient: f64,
    /// Usable navigation channel width, m
    pub channel_width_m: f64,
    /// Tightest bend radius of the stretch, m
    pub curvature_radius_m: f64,
    /// Overall propulsive efficiency (hull + propeller + transmission)
    pub propulsive_efficiency: f64,
}

impl EngineeringParameters {
    pub fn validate(&self) -> HvResult<()> {
        ensure_positive(self.barge_length_m, "barge length")?;
        ensure_positive(self.barge_beam_m, "barge beam")?;
        ensure_positive(self.barge_depth_m, "barge depth")?;
        ensure_positive(self.design_draft_m, "design draft")?;
        ensure_positive(self.channel_width_m, "channel width")?;
        ensure_positive(self.curvature_radius_m, "curvature radius")?;
        if !(0.0..=1.0).contains(&self.block_coefficient) || self.block_coefficient == 0.0 {
            return Err(HvError::InvalidArg {
                what: "block coefficient must be in (0,1]",
            });
        }
        if !(0.0..=1.0).contains(&self.propulsive_efficiency) || self.propulsive_efficiency == 0.0 {
            return Err(HvError::InvalidArg {
                what: "propulsive efficiency must be in (0,1]",
            });
        }
        if self.design_draft_m > self.barge_depth_m {
            return Err(HvError::InvalidArg {
                what: "design draft cannot exceed moulded depth",
            });
        }
        Ok(())
    }
}

/// Operating profile: speeds, dwell times and the mandatory monthly
/// river depth series. The depth series is an external input (gauging
/// stations, not this crate) and is never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingParameters {
    /// Target speed through water, knots
    pub cruise_speed_knots: f64,
    /// Mean river current, knots
    pub current_speed_knots: f64,
    /// Days the convoy is available per year (rest is yard/weather time)
    pub operating_days_per_year: f64,
    /// One-way route distance, km
    pub route_distance_km: f64,
    /// Lock transit time per round trip, min
    pub lock_time_min: f64,
    /// Formation/breakup maneuver time per barge, min
    pub maneuver_time_per_barge_min: f64,
    /// Terminal loading rate, t/h per berth
    pub loading_rate_t_per_h: f64,
    /// Terminal unloading rate, t/h per berth
    pub unloading_rate_t_per_h: f64,
    /// Berths working the convoy simultaneously
    pub berths: u32,
    /// Under-keel clearance demanded by the pilots, m
    pub keel_clearance_m: f64,
    /// Draft below which the month is not navigated at all, m
    pub min_navigable_draft_m: f64,
    /// Mean navigable depth per calendar month, m (January first)
    pub monthly_river_depth_m: [f64; MONTHS_PER_YEAR],
}

impl OperatingParameters {
    pub fn validate(&self) -> HvResult<()> {
        ensure_positive(self.cruise_speed_knots, "cruise speed")?;
        ensure_finite(self.current_speed_knots, "current speed")?;
        if self.current_speed_knots < 0.0 {
            return Err(HvError::InvalidArg {
                what: "current speed cannot be negative",
            });
        }
        ensure_positive(self.operating_days_per_year, "operating days")?;
        if self.operating_days_per_year > 366.0 {
            return Err(HvError::InvalidArg {
                what: "operating days cannot exceed a year",
            });
        }
        ensure_positive(self.route_distance_km, "route distance")?;
        ensure_finite(self.lock_time_min, "lock time")?;
        ensure_finite(self.maneuver_time_per_barge_min, "maneuver time")?;
        if self.lock_time_min < 0.0 || self.maneuver_time_per_barge_min < 0.0 {
            return Err(HvError::InvalidArg {
                what: "dwell times cannot be negative",
            });
        }
        ensure_positive(self.loading_rate_t_per_h, "loading rate")?;
        ensure_positive(self.unloading_rate_t_per_h, "unloading rate")?;
        if self.berths == 0 {
            return Err(HvError::InvalidArg {
                what: "at least one berth is required",
            });
        }
        ensure_finite(self.keel_clearance_m, "keel clearance")?;
        ensure_finite(self.min_navigable_draft_m, "minimum navigable draft")?;
        if self.keel_clearance_m < 0.0 || self.min_navigable_draft_m < 0.0 {
            return Err(HvError::InvalidArg {
                what: "clearance and minimum draft cannot be negative",
            });
        }
        for depth in &self.monthly_river_depth_m {
            ensure_positive(*depth, "monthly river depth")?;
        }
        Ok(())
    }
}

/// Capital, labour and fuel economics. The interest rate is an
/// already-resolved value; how the caller obtained it (central bank
/// lookup, WACC model) is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialParameters {
    /// Annual discount/interest rate, decimal (0.15 = 15 %)
    pub interest_rate: f64,
    /// Amortization horizon, years
    pub useful_life_years: u32,
    /// Diesel price at the pump barge, currency/L
    pub fuel_price_per_litre: f64,
    /// Diesel density, t/m3 (numerically kg/L)
    pub fuel_density_t_per_m3: f64,
    /// Specific fuel consumption, kg/BHP/h
    pub sfc_kg_per_hp_h: f64,
    /// Crew complement
    pub crew_size: u32,
    /// Mean monthly base salary, currency
    pub crew_monthly_salary: f64,
    /// Monthly provisions per crew member, currency
    pub catering_monthly_allowance: f64,
    /// Payroll social charges multiplier, decimal
    pub social_charges_rate: f64,
    /// Annual maintenance provision as fraction of CAPEX
    pub maintenance_rate: f64,
    /// Annual hull & machinery + P&I premium as fraction of CAPEX
    pub insurance_rate: f64,
    /// Administrative overhead applied on operating cost bases
    pub admin_overhead_rate: f64,
    /// Tank-to-wake CO2 per kg of fuel burned, kg/kg
    pub co2_factor_kg_per_kg_fuel: f64,
}

impl FinancialParameters {
    pub fn validate(&self) -> HvResult<()> {
        ensure_finite(self.interest_rate, "interest rate")?;
        if self.interest_rate < 0.0 {
            return Err(HvError::InvalidArg {
                what: "interest rate cannot be negative",
            });
        }
        if self.useful_life_years == 0 {
            return Err(HvError::InvalidArg {
                what: "useful life must be at least one year",
            });
        }
        ensure_positive(self.fuel_price_per_litre, "fuel price")?;
        ensure_positive(self.fuel_density_t_per_m3, "fuel density")?;
        ensure_positive(self.sfc_kg_per_hp_h, "specific fuel consumption")?;
        ensure_positive(self.crew_monthly_salary, "crew salary")?;
        ensure_finite(self.catering_monthly_allowance, "catering allowance")?;
        for (v, what) in [
            (self.social_charges_rate, "social charges rate"),
            (self.maintenance_rate, "maintenance rate"),
            (self.insurance_rate, "insurance rate"),
            (self.admin_overhead_rate, "admin overhead rate"),
            (self.co2_factor_kg_per_kg_fuel, "CO2 factor"),
        ] {
            ensure_finite(v, what)?;
            if v < 0.0 {
                return Err(HvError::InvalidArg { what });
            }
        }
        Ok(())
    }
}

/// A candidate main engine for the design-stage catalogue search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOption {
    /// Rated installed power, BHP
    pub installed_bhp: f64,
    /// Acquisition cost of the engine package, currency
    pub acquisition_cost: f64,
}

/// One complete analysis input: the three parameter records together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub engineering: EngineeringParameters,
    pub operating: OperatingParameters,
    pub financial: FinancialParameters,
}

impl Scenario {
    pub fn validate(&self) -> HvResult<()> {
        self.engineering.validate()?;
        self.operating.validate()?;
        self.financial.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineering() -> EngineeringParameters {
        EngineeringParameters {
            barge_length_m: 60.96,
            barge_beam_m: 10.67,
            barge_depth_m: 4.27,
            design_draft_m: 3.66,
            block_coefficient: 0.90,
            channel_width_m: 100.0,
            curvature_radius_m: 800.0,
            propulsive_efficiency: 0.50,
        }
    }

    #[test]
    fn engineering_validates() {
        assert!(engineering().validate().is_ok());
    }

    #[test]
    fn draft_deeper_than_hull_rejected() {
        let mut eng = engineering();
        eng.design_draft_m = eng.barge_depth_m + 0.1;
        assert!(eng.validate().is_err());
    }

    #[test]
    fn scenario_roundtrips_through_json() {
        let eng = engineering();
        let json = serde_json::to_string(&eng).unwrap();
        let back: EngineeringParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.barge_length_m, eng.barge_length_m);
        assert_eq!(back.channel_width_m, eng.channel_width_m);
    }
}
