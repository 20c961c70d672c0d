//! Financial aggregator.
//!
//! Sums reward and query amounts for one employee over inputs that have
//! already been filtered to the reporting interval and to that employee.
//! Amounts were validated non-negative at creation time, so aggregation is a
//! plain sum; a record without an amount still counts (non-monetary
//! recognition, or a query raised without a fine).

use crate::models::{FinancialSummary, HrQuery, Reward};

/// Totals rewards and queries into a [`FinancialSummary`].
pub fn compute_financials(rewards: &[&Reward], queries: &[&HrQuery]) -> FinancialSummary {
    let reward_amount: f64 = rewards.iter().map(|r| r.amount.unwrap_or(0.0)).sum();
    let query_amount: f64 = queries.iter().map(|q| q.amount.unwrap_or(0.0)).sum();
    FinancialSummary {
        reward_count: rewards.len() as u32,
        reward_amount,
        query_count: queries.len() as u32,
        query_amount,
        net_impact: reward_amount - query_amount,
    }
}
