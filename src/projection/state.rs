//! Running state for a single projection

use crate::params::Parameters;
use super::results::YearlySnapshot;

/// Accumulator state advanced month by month during a projection
///
/// Lifetime totals roll up at year boundaries; in-year totals reset when a
/// new year opens.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed, 0 before the first year opens)
    pub year: u32,

    /// Capital currently invested (entry fees already deducted)
    pub capital: f64,

    /// Lifetime dividend total
    pub total_dividends: f64,

    /// Lifetime fee total, seeded with the entry fee on the initial deposit
    pub total_fees: f64,

    /// Lifetime tax total
    pub total_tax: f64,

    /// Dividends generated in the current year
    pub yearly_dividends: f64,

    /// Fees charged in the current year
    pub yearly_fees: f64,

    /// Tax accrued in the current year
    pub yearly_tax: f64,
}

impl ProjectionState {
    /// Initialize state from the parameter set
    ///
    /// The entry fee on the initial deposit is charged immediately: capital
    /// starts net of it and the fee seeds the lifetime total.
    pub fn from_params(params: &Parameters) -> Self {
        let entry_fee = params.initial_amount * params.entry_fee_pct / 100.0;
        Self {
            year: 0,
            capital: params.initial_amount - entry_fee,
            total_dividends: 0.0,
            total_fees: entry_fee,
            total_tax: 0.0,
            yearly_dividends: 0.0,
            yearly_fees: 0.0,
            yearly_tax: 0.0,
        }
    }

    /// Open the next projection year, resetting the in-year accumulators
    pub fn begin_year(&mut self) {
        self.year += 1;
        self.yearly_dividends = 0.0;
        self.yearly_fees = 0.0;
        self.yearly_tax = 0.0;
    }

    /// Close the current year: roll in-year totals into lifetime totals and
    /// emit the end-of-year snapshot
    pub fn close_year(&mut self, reinvest_dividends: bool) -> YearlySnapshot {
        self.total_dividends += self.yearly_dividends;
        self.total_fees += self.yearly_fees;
        self.total_tax += self.yearly_tax;

        let net_capital = if reinvest_dividends {
            self.capital
        } else {
            self.capital + (self.yearly_dividends - self.yearly_tax)
        };

        YearlySnapshot {
            year: self.year,
            capital: self.capital,
            dividends: self.yearly_dividends,
            fees: self.yearly_fees,
            tax: self.yearly_tax,
            net_capital,
        }
    }
}
