//! Core projection engine for monthly capital projections

use crate::error::SimulationError;
use crate::params::{AssetKind, Parameters};
use super::results::ProjectionResult;
use super::state::ProjectionState;

/// Main projection engine
///
/// Holds a validated parameter set and projects it for any asset kind. Each
/// projection is an independent pure computation; the engine carries no state
/// between calls.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: Parameters,
}

impl ProjectionEngine {
    /// Create an engine with a validated parameter set
    ///
    /// Fails with [`SimulationError`] on non-positive durations or negative
    /// monetary/rate inputs; nothing is computed for a rejected set.
    pub fn new(params: Parameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameter set this engine projects
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Engine projecting the same parameter set under a different scenario
    ///
    /// The scenario is not part of validation, so the derived set stays
    /// valid by construction.
    pub fn with_scenario(&self, scenario: crate::params::Scenario) -> Self {
        Self {
            params: Parameters {
                scenario,
                ..self.params.clone()
            },
        }
    }

    /// Project the parameter set for one asset kind
    ///
    /// Runs `duration_years * 12` monthly steps and returns year-level
    /// snapshots plus aggregate metrics. Deterministic and total for any
    /// validated parameter set.
    pub fn project(&self, asset: AssetKind) -> ProjectionResult {
        let params = &self.params;
        let monthly_rate = params.effective_annual_rate_pct(asset) / 100.0 / 12.0;
        let tax_rate = params.effective_tax_rate();
        // The risk-free baseline never compounds reinvested interest, even
        // when reinvestment is on; its distributed interest is added back
        // outside the loop like any other undistributed dividend
        let compound = params.reinvest_dividends && asset.is_market_driven();

        log::debug!(
            "projecting {} over {} years at {:.4}%/month",
            asset.label(),
            params.duration_years,
            monthly_rate * 100.0
        );

        let mut state = ProjectionState::from_params(params);
        let mut yearly_data = Vec::with_capacity(params.duration_years as usize);

        for _year in 1..=params.duration_years {
            state.begin_year();
            for _month in 1..=12 {
                self.step_month(&mut state, monthly_rate, tax_rate, compound);
            }
            yearly_data.push(state.close_year(params.reinvest_dividends));
        }

        let final_capital = state.capital;
        let net_final_capital = if params.reinvest_dividends {
            final_capital
        } else {
            final_capital + (state.total_dividends - state.total_tax)
        };

        let total_investment = params.total_investment();
        let annual_return_pct = geometric_annual_return_pct(
            net_final_capital,
            total_investment,
            params.duration_years,
        );
        let net_present_value = net_final_capital
            - total_investment
                * (1.0 + params.inflation_rate_pct / 100.0).powi(params.duration_years as i32);

        ProjectionResult {
            asset,
            final_capital,
            total_dividends: state.total_dividends,
            total_fees: state.total_fees,
            total_tax: state.total_tax,
            net_final_capital,
            annual_return_pct,
            // Deliberately the same two-point figure; see projection::irr
            // for a rate that prices the monthly schedule
            internal_rate_of_return_pct: annual_return_pct,
            net_present_value,
            yearly_data,
        }
    }

    /// Advance the state by one month
    fn step_month(
        &self,
        state: &mut ProjectionState,
        monthly_rate: f64,
        tax_rate: f64,
        compound: bool,
    ) {
        let params = &self.params;

        // Contribution is credited first, net of the entry fee; the fee is
        // charged every contributing month, not only once
        if params.monthly_payment > 0.0 {
            state.capital += params.monthly_payment * (1.0 - params.entry_fee_pct / 100.0);
            state.yearly_fees += params.monthly_payment * params.entry_fee_pct / 100.0;
        }

        // Dividend accrues on the contribution-adjusted capital
        let dividend = state.capital * monthly_rate;
        let management_fee = state.capital * (params.management_fee_annual_pct / 100.0) / 12.0;
        let tax = dividend * tax_rate;

        state.yearly_dividends += dividend;
        state.yearly_fees += management_fee;
        state.yearly_tax += tax;

        if compound {
            state.capital += dividend - tax - management_fee;
        } else {
            // Dividends are tracked but not added back; the management fee
            // erodes capital regardless of the reinvestment choice
            state.capital -= management_fee;
        }
    }
}

/// Two-point geometric mean annual growth, percent
///
/// Defined fallback of 0 when the ratio is undefined: zero contributions, a
/// non-positive net final value, or a zero horizon.
fn geometric_annual_return_pct(net_final: f64, invested: f64, years: u32) -> f64 {
    if invested <= 0.0 || net_final <= 0.0 || years == 0 {
        return 0.0;
    }
    ((net_final / invested).powf(1.0 / years as f64) - 1.0) * 100.0
}

/// Validate and project in one call
pub fn simulate(
    params: &Parameters,
    asset: AssetKind,
) -> Result<ProjectionResult, SimulationError> {
    Ok(ProjectionEngine::new(params.clone())?.project(asset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Scenario;
    use approx::assert_relative_eq;

    fn fee_free_params() -> Parameters {
        Parameters {
            management_fee_annual_pct: 0.0,
            entry_fee_pct: 0.0,
            income_tax_rate_pct: 0.0,
            social_tax_rate_pct: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_contributions_give_all_zero_result() {
        let params = Parameters {
            initial_amount: 0.0,
            monthly_payment: 0.0,
            ..Default::default()
        };
        let result = simulate(&params, AssetKind::IncomeProperty).unwrap();

        assert_relative_eq!(result.final_capital, 0.0);
        assert_relative_eq!(result.total_dividends, 0.0);
        assert_relative_eq!(result.total_fees, 0.0);
        assert_relative_eq!(result.total_tax, 0.0);
        assert_relative_eq!(result.net_final_capital, 0.0);
        assert_relative_eq!(result.annual_return_pct, 0.0);
        assert_relative_eq!(result.internal_rate_of_return_pct, 0.0);
        assert_relative_eq!(result.net_present_value, 0.0);
        for row in &result.yearly_data {
            assert_relative_eq!(row.capital, 0.0);
            assert_relative_eq!(row.dividends, 0.0);
            assert_relative_eq!(row.fees, 0.0);
            assert_relative_eq!(row.tax, 0.0);
            assert_relative_eq!(row.net_capital, 0.0);
        }
    }

    #[test]
    fn test_yearly_data_covers_horizon_without_gaps() {
        let params = Parameters {
            duration_years: 25,
            ..Default::default()
        };
        let result = simulate(&params, AssetKind::EquityIndex).unwrap();

        assert_eq!(result.yearly_data.len(), 25);
        for (i, row) in result.yearly_data.iter().enumerate() {
            assert_eq!(row.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = Parameters::default();
        let a = simulate(&params, AssetKind::IncomeProperty).unwrap();
        let b = simulate(&params, AssetKind::IncomeProperty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_capital_non_decreasing_without_fees() {
        let result = simulate(&fee_free_params(), AssetKind::EquityIndex).unwrap();

        let mut previous = 0.0;
        for row in &result.yearly_data {
            assert!(row.capital >= previous);
            previous = row.capital;
        }
    }

    #[test]
    fn test_default_scenario_projection() {
        // 10 000 initial + 500/month over 10 years at 4.5% SCPI, neutral
        let params = Parameters::default();
        let result = simulate(&params, AssetKind::IncomeProperty).unwrap();

        assert_relative_eq!(params.total_investment(), 70_000.0);
        assert_eq!(result.yearly_data.len(), 10);
        assert!(result.final_capital > 0.0);

        // Net monthly return is positive, so capital strictly increases
        let mut previous = 0.0;
        for row in &result.yearly_data {
            assert!(row.capital > previous);
            previous = row.capital;
        }

        assert_relative_eq!(
            result.net_present_value,
            result.net_final_capital - 70_000.0 * 1.02f64.powi(10),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_compounding_matches_closed_form() {
        // 1200 up front at 12% nominal, no fees or taxes: 1% per month
        let params = Parameters {
            initial_amount: 1200.0,
            monthly_payment: 0.0,
            duration_years: 1,
            etf_annual_rate_pct: 12.0,
            scenario: Scenario::Neutral,
            ..fee_free_params()
        };
        let result = simulate(&params, AssetKind::EquityIndex).unwrap();

        assert_relative_eq!(
            result.final_capital,
            1200.0 * 1.01f64.powi(12),
            epsilon = 1e-9
        );
        assert_eq!(result.yearly_data.len(), 1);
        assert_relative_eq!(result.net_final_capital, result.final_capital);
    }

    #[test]
    fn test_distributed_dividends_do_not_compound() {
        let params = Parameters {
            initial_amount: 1200.0,
            monthly_payment: 0.0,
            duration_years: 1,
            etf_annual_rate_pct: 12.0,
            reinvest_dividends: false,
            scenario: Scenario::Neutral,
            ..fee_free_params()
        };
        let result = simulate(&params, AssetKind::EquityIndex).unwrap();

        // Capital never moves; each month distributes 1% of 1200
        assert_relative_eq!(result.final_capital, 1200.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_dividends, 144.0, epsilon = 1e-9);
        assert_relative_eq!(result.net_final_capital, 1344.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.yearly_data[0].net_capital,
            1344.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_risk_free_ignores_reinvestment_for_capital_path() {
        // The risk-free asset takes the fee-only capital-update branch in
        // both modes; only the net figures differ
        let reinvest = Parameters {
            reinvest_dividends: true,
            ..Default::default()
        };
        let distribute = Parameters {
            reinvest_dividends: false,
            ..Default::default()
        };

        let a = simulate(&reinvest, AssetKind::RiskFreeSavings).unwrap();
        let b = simulate(&distribute, AssetKind::RiskFreeSavings).unwrap();

        assert_relative_eq!(a.final_capital, b.final_capital);
        for (ra, rb) in a.yearly_data.iter().zip(&b.yearly_data) {
            assert_relative_eq!(ra.capital, rb.capital);
            assert_relative_eq!(ra.dividends, rb.dividends);
        }
        // Distributed dividends net of tax are added back outside the loop
        assert!(b.net_final_capital > a.net_final_capital);
    }

    #[test]
    fn test_invalid_params_rejected_before_simulation() {
        let params = Parameters {
            duration_years: 0,
            ..Default::default()
        };
        assert_eq!(
            simulate(&params, AssetKind::EquityIndex),
            Err(SimulationError::NonPositiveDuration)
        );
    }

    #[test]
    fn test_geometric_return_fallbacks() {
        assert_relative_eq!(geometric_annual_return_pct(1000.0, 0.0, 10), 0.0);
        assert_relative_eq!(geometric_annual_return_pct(-50.0, 1000.0, 10), 0.0);
        // Doubling over 10 years is ~7.18%/year
        assert_relative_eq!(
            geometric_annual_return_pct(2000.0, 1000.0, 10),
            (2.0f64.powf(0.1) - 1.0) * 100.0,
            epsilon = 1e-12
        );
    }
}
