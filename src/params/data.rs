//! User parameter set and asset universe definitions

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Annual rate of the regulated risk-free savings account (Livret A), percent.
/// Fixed by regulation; user-entered rates and scenarios never touch it.
pub const RISK_FREE_ANNUAL_RATE_PCT: f64 = 2.0;

/// Macro-economic scenario scaling the market-driven nominal rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Optimistic,
    Neutral,
    Pessimistic,
}

impl Scenario {
    /// All scenarios, in optimism order
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Neutral, Scenario::Pessimistic];

    /// Multiplier applied to market-driven nominal rates.
    /// Process-wide constant table; the risk-free asset is never scaled.
    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Optimistic => 1.2,
            Scenario::Neutral => 1.0,
            Scenario::Pessimistic => 0.7,
        }
    }
}

/// Investment vehicle being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Pooled real-estate income vehicle (SCPI)
    IncomeProperty,
    /// Passive equity-index tracker (ETF)
    EquityIndex,
    /// Government-backed savings baseline (Livret A)
    RiskFreeSavings,
}

impl AssetKind {
    /// All asset kinds, in comparison display order
    pub const ALL: [AssetKind; 3] = [
        AssetKind::IncomeProperty,
        AssetKind::EquityIndex,
        AssetKind::RiskFreeSavings,
    ];

    /// Whether the asset's rate is market-driven (scenario-scaled)
    pub fn is_market_driven(self) -> bool {
        !matches!(self, AssetKind::RiskFreeSavings)
    }

    /// Display label for tables and exports
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::IncomeProperty => "SCPI",
            AssetKind::EquityIndex => "ETF",
            AssetKind::RiskFreeSavings => "Livret A",
        }
    }
}

/// User parameter set shared by all three projections
///
/// Owned by the caller, read-only during a projection. Monetary amounts are in
/// euros, all rates in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Capital deposited at the start of the projection
    pub initial_amount: f64,

    /// Contribution deposited at the start of every month
    pub monthly_payment: f64,

    /// Projection horizon in years (1..50 in practice)
    pub duration_years: u32,

    /// Nominal annual return of the income-property vehicle, percent
    pub scpi_annual_rate_pct: f64,

    /// Nominal annual return of the equity-index tracker, percent
    pub etf_annual_rate_pct: f64,

    /// Annual management fee on capital, prorated monthly, percent
    pub management_fee_annual_pct: f64,

    /// One-time fee on every deposit (initial and monthly), percent
    pub entry_fee_pct: f64,

    /// Income tax on distributed returns, percent
    pub income_tax_rate_pct: f64,

    /// Social contributions on distributed returns, percent
    pub social_tax_rate_pct: f64,

    /// Whether monthly returns are compounded back into capital
    /// (net of tax and management fee)
    pub reinvest_dividends: bool,

    /// Annual inflation used for the final real-value adjustment, percent
    pub inflation_rate_pct: f64,

    /// Optimism scenario applied to market-driven rates
    pub scenario: Scenario,
}

impl Parameters {
    /// Validate the parameter set before any simulation work
    ///
    /// Rejects non-positive durations and negative monetary or rate inputs.
    /// Unusual but mathematically valid combinations pass through untouched.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.duration_years == 0 {
            return Err(SimulationError::NonPositiveDuration);
        }

        let amounts = [
            ("initial_amount", self.initial_amount),
            ("monthly_payment", self.monthly_payment),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteInput { field });
            }
            if value < 0.0 {
                return Err(SimulationError::NegativeAmount { field, value });
            }
        }

        let rates = [
            ("scpi_annual_rate_pct", self.scpi_annual_rate_pct),
            ("etf_annual_rate_pct", self.etf_annual_rate_pct),
            ("management_fee_annual_pct", self.management_fee_annual_pct),
            ("entry_fee_pct", self.entry_fee_pct),
            ("income_tax_rate_pct", self.income_tax_rate_pct),
            ("social_tax_rate_pct", self.social_tax_rate_pct),
            ("inflation_rate_pct", self.inflation_rate_pct),
        ];
        for (field, value) in rates {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteInput { field });
            }
            if value < 0.0 {
                return Err(SimulationError::NegativeRate { field, value });
            }
        }

        Ok(())
    }

    /// Scenario-adjusted annual rate for an asset kind, percent
    ///
    /// Market-driven assets take their user-entered nominal rate times the
    /// scenario multiplier; the risk-free baseline uses the fixed regulated
    /// rate regardless of scenario.
    pub fn effective_annual_rate_pct(&self, asset: AssetKind) -> f64 {
        match asset {
            AssetKind::IncomeProperty => self.scpi_annual_rate_pct * self.scenario.multiplier(),
            AssetKind::EquityIndex => self.etf_annual_rate_pct * self.scenario.multiplier(),
            AssetKind::RiskFreeSavings => RISK_FREE_ANNUAL_RATE_PCT,
        }
    }

    /// Combined tax rate on distributed returns, as a fraction
    pub fn effective_tax_rate(&self) -> f64 {
        (self.income_tax_rate_pct + self.social_tax_rate_pct) / 100.0
    }

    /// Total nominal amount contributed over the horizon
    pub fn total_investment(&self) -> f64 {
        self.initial_amount + self.monthly_payment * 12.0 * self.duration_years as f64
    }
}

impl Default for Parameters {
    /// Typical starting point: 10 000 € plus 500 €/month over ten years
    fn default() -> Self {
        Self {
            initial_amount: 10_000.0,
            monthly_payment: 500.0,
            duration_years: 10,
            scpi_annual_rate_pct: 4.5,
            etf_annual_rate_pct: 7.0,
            management_fee_annual_pct: 1.5,
            entry_fee_pct: 5.0,
            income_tax_rate_pct: 30.0,
            social_tax_rate_pct: 17.2,
            reinvest_dividends: true,
            inflation_rate_pct: 2.0,
            scenario: Scenario::Neutral,
        }
    }
}
