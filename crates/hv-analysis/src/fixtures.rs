//! Shared scenario fixture for the analysis tests.

use hv_core::{EngineeringParameters, FinancialParameters, OperatingParameters, Scenario};

pub(crate) fn base_scenario() -> Scenario {
    Scenario {
        engineering: EngineeringParameters {
            barge_length_m: 60.96,
            barge_beam_m: 10.67,
            barge_depth_m: 4.27,
            design_draft_m: 3.66,
            block_coefficient: 0.90,
            channel_width_m: 100.0,
            curvature_radius_m: 800.0,
            propulsive_efficiency: 0.50,
        },
        operating: OperatingParameters {
            cruise_speed_knots: 6.0,
            current_speed_knots: 2.0,
            operating_days_per_year: 330.0,
            route_distance_km: 1000.0,
            lock_time_min: 0.0,
            maneuver_time_per_barge_min: 20.0,
            loading_rate_t_per_h: 2000.0,
            unloading_rate_t_per_h: 1000.0,
            berths: 2,
            keel_clearance_m: 0.5,
            min_navigable_draft_m: 1.0,
            monthly_river_depth_m: [
                7.72, 9.87, 10.86, 10.98, 8.43, 6.35, 5.12, 3.89, 3.30, 3.00, 3.65, 5.23,
            ],
        },
        financial: FinancialParameters {
            interest_rate: 0.15,
            useful_life_years: 20,
            fuel_price_per_litre: 4.50,
            fuel_density_t_per_m3: 0.85,
            sfc_kg_per_hp_h: 0.16,
            crew_size: 8,
            crew_monthly_salary: 5000.0,
            catering_monthly_allowance: 800.0,
            social_charges_rate: 0.90,
            maintenance_rate: 0.04,
            insurance_rate: 0.015,
            admin_overhead_rate: 0.10,
            co2_factor_kg_per_kg_fuel: 3.206,
        },
    }
}
