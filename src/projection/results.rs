//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::params::AssetKind;

/// End-of-year row of a projection
///
/// `year` runs 1..=duration with no gaps. `net_capital` equals `capital` when
/// dividends are reinvested, otherwise capital plus the year's dividends net
/// of tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: u32,
    pub capital: f64,
    pub dividends: f64,
    pub fees: f64,
    pub tax: f64,
    pub net_capital: f64,
}

/// Complete projection result for one asset kind
///
/// Immutable once returned by the engine; every monetary field is derived
/// solely from the simulation loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Asset kind this projection was run for
    pub asset: AssetKind,

    /// Capital at the end of the last simulated month
    pub final_capital: f64,

    /// Lifetime dividends generated
    pub total_dividends: f64,

    /// Lifetime fees charged (entry fees plus management fees)
    pub total_fees: f64,

    /// Lifetime tax on dividends
    pub total_tax: f64,

    /// Final capital plus undistributed dividends net of tax
    pub net_final_capital: f64,

    /// Geometric mean annual growth vs total contributed capital, percent
    pub annual_return_pct: f64,

    /// Simplified two-point internal rate of return, percent
    ///
    /// Computed identically to `annual_return_pct`: a two-point geometric
    /// return, not a cash-flow-schedule IRR. See [`crate::projection::irr`]
    /// for a figure that prices the actual monthly contribution schedule.
    pub internal_rate_of_return_pct: f64,

    /// Net final capital minus inflation-deflated total contributions
    pub net_present_value: f64,

    /// Ordered end-of-year snapshots, one per simulated year
    pub yearly_data: Vec<YearlySnapshot>,
}

/// The three projections a caller builds from one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub income_property: ProjectionResult,
    pub equity_index: ProjectionResult,
    pub risk_free_savings: ProjectionResult,
}

impl ComparisonResult {
    /// Get the projection for a given asset kind
    pub fn get(&self, asset: AssetKind) -> &ProjectionResult {
        match asset {
            AssetKind::IncomeProperty => &self.income_property,
            AssetKind::EquityIndex => &self.equity_index,
            AssetKind::RiskFreeSavings => &self.risk_free_savings,
        }
    }

    /// Iterate the three projections in display order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectionResult> {
        AssetKind::ALL.iter().map(move |&asset| self.get(asset))
    }

    /// The market-driven projection with the highest net final capital
    ///
    /// The conclusion line compares SCPI and ETF only; the risk-free
    /// baseline is a comparator, never a recommendation.
    pub fn best_market_asset(&self) -> &ProjectionResult {
        if self.income_property.net_final_capital >= self.equity_index.net_final_capital {
            &self.income_property
        } else {
            &self.equity_index
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonRunner;
    use crate::params::Parameters;

    #[test]
    fn test_get_matches_asset_field() {
        let runner = ComparisonRunner::new(Parameters::default()).unwrap();
        let results = runner.run();

        for asset in AssetKind::ALL {
            assert_eq!(results.get(asset).asset, asset);
        }
        assert_eq!(results.iter().count(), 3);
    }

    #[test]
    fn test_best_market_asset_excludes_risk_free() {
        // Near-zero market rates so the Livret A outperforms both
        let params = Parameters {
            scpi_annual_rate_pct: 0.1,
            etf_annual_rate_pct: 0.2,
            management_fee_annual_pct: 0.0,
            entry_fee_pct: 0.0,
            ..Default::default()
        };
        let results = ComparisonRunner::new(params).unwrap().run();

        let best = results.best_market_asset();
        assert_ne!(best.asset, AssetKind::RiskFreeSavings);
        assert_eq!(best.asset, AssetKind::EquityIndex);
    }
}
