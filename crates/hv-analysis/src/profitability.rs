//! Profitability over a speed × freight-price grid.
//!
//! One annual simulation per grid speed, re-priced across the freight
//! axis: revenue is price times carried cargo, profit is revenue minus
//! total annual cost, margin is profit over revenue. At zero revenue
//! the margin is undefined, never a fake number.

use hv_core::Scenario;
use hv_sim::{simulate_year, AnnualOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;
use crate::sweep::SweepRange;

/// Row-major matrices: `profit[speed_index][price_index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMatrix {
    pub speeds_knots: Vec<f64>,
    pub prices_per_tonne: Vec<f64>,
    /// Annual cargo moved at each grid speed, t
    pub cargo_t: Vec<f64>,
    /// Annual profit, currency
    pub profit: Vec<Vec<f64>>,
    /// Profit over revenue; None where revenue is zero
    pub margin: Vec<Vec<Option<f64>>>,
}

impl ProfitabilityMatrix {
    /// Grid cell with the highest profit, as (speed index, price index).
    pub fn most_profitable_cell(&self) -> (usize, usize) {
        let mut best = (0, 0);
        for (i, row) in self.profit.iter().enumerate() {
            for (j, &p) in row.iter().enumerate() {
                if p > self.profit[best.0][best.1] {
                    best = (i, j);
                }
            }
        }
        best
    }
}

/// Evaluate annual profit at every speed × price combination.
pub fn profitability_matrix(
    scenario: &Scenario,
    speeds: &SweepRange,
    prices: &SweepRange,
) -> AnalysisResult<ProfitabilityMatrix> {
    let speeds_knots = speeds.values();
    let prices_per_tonne = prices.values();

    // cargo and cost depend on speed only; prices just re-weigh them
    let by_speed: Vec<(f64, f64)> = speeds_knots
        .par_iter()
        .map(|&speed_knots| {
            let result = simulate_year(
                scenario,
                &AnnualOptions {
                    monthly_speed_knots: Some([speed_knots; 12]),
                    installed_bhp: None,
                    pusher_basis: None,
                },
            )?;
            Ok((result.annual_cargo_t, result.total_annual_cost))
        })
        .collect::<AnalysisResult<_>>()?;

    let mut profit = Vec::with_capacity(by_speed.len());
    let mut margin = Vec::with_capacity(by_speed.len());
    for &(cargo, cost) in &by_speed {
        let mut profit_row = Vec::with_capacity(prices_per_tonne.len());
        let mut margin_row = Vec::with_capacity(prices_per_tonne.len());
        for &price in &prices_per_tonne {
            let revenue = price * cargo;
            let p = revenue - cost;
            profit_row.push(p);
            margin_row.push((revenue > 0.0).then(|| p / revenue));
        }
        profit.push(profit_row);
        margin.push(margin_row);
    }

    Ok(ProfitabilityMatrix {
        speeds_knots,
        prices_per_tonne,
        cargo_t: by_speed.iter().map(|&(cargo, _)| cargo).collect(),
        profit,
        margin,
    })
}
