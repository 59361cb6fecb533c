//! Cashflow-accurate internal rate of return
//!
//! `ProjectionResult::internal_rate_of_return_pct` is a simplified two-point
//! figure that treats the whole contribution as if deposited up front. This
//! module prices the actual schedule instead: the initial deposit and every
//! monthly contribution as dated outflows, the net final capital as the
//! terminal inflow. The two figures diverge whenever `monthly_payment > 0`.

use crate::params::Parameters;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: u32 = 1000;
// Bounds on the monthly rate: -99% to +1000% per period
const RATE_MIN: f64 = -0.99;
const RATE_MAX: f64 = 10.0;

/// Annualized IRR of the full monthly contribution schedule, percent
///
/// Returns `None` when no rate equates the schedule (e.g., no sign change in
/// the cashflows). An all-zero schedule yields 0.
pub fn schedule_irr_pct(params: &Parameters, net_final_capital: f64) -> Option<f64> {
    let months = params.duration_years as usize * 12;
    if months == 0 {
        return None;
    }

    // Outflows at the start of each month, terminal value at the horizon
    let mut cashflows = vec![-params.monthly_payment; months + 1];
    cashflows[0] = -(params.initial_amount + params.monthly_payment);
    cashflows[months] = net_final_capital;

    monthly_irr(&cashflows).map(|rate| ((1.0 + rate).powi(12) - 1.0) * 100.0)
}

/// Solve for the periodic rate making the schedule's NPV zero
///
/// Newton-Raphson from a 5%-annual starting guess, falling back to bisection
/// when the derivative degenerates or the iteration fails to converge.
fn monthly_irr(cashflows: &[f64]) -> Option<f64> {
    if cashflows.iter().all(|&cf| cf.abs() < TOLERANCE) {
        return Some(0.0);
    }
    // An IRR only exists when the schedule changes sign
    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !has_inflow || !has_outflow {
        return None;
    }

    let mut rate = 0.05 / 12.0;
    for _ in 0..MAX_ITERATIONS {
        let (npv, derivative) = npv_with_derivative(cashflows, rate);
        if derivative.abs() < 1e-20 {
            return bisect_irr(cashflows);
        }

        let next = (rate - npv / derivative).clamp(RATE_MIN, RATE_MAX);
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    bisect_irr(cashflows)
}

fn npv_with_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut derivative = 0.0;
    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            derivative -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }
    (npv, derivative)
}

fn bisect_irr(cashflows: &[f64]) -> Option<f64> {
    let npv = |rate: f64| -> f64 {
        cashflows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
            .sum()
    };

    let mut low = RATE_MIN;
    let mut high = RATE_MAX;
    if npv(low) * npv(high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }
        if npv_mid * npv(low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}
