//! Dashboard overview data.
//!
//! The dashboard works off a pre-aggregated stats record supplied as a
//! fixture at startup; it is not derived from the payment list. The helpers
//! here turn that record into the shapes the overview cards and charts need.

use serde::{Deserialize, Serialize};

/// Three-letter month labels for the revenue chart, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One payment method's share of the dashboard breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodBreakdown {
    /// The display name of the method, e.g. "Bank Transfer".
    pub method: String,
    /// How many payments used this method.
    pub count: u32,
    /// The total amount paid with this method.
    pub amount: f64,
}

/// The pre-aggregated numbers behind the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total enrolled students.
    pub total_students: u32,
    /// Total revenue collected to date.
    pub total_revenue: f64,
    /// Number of payments still pending.
    pub pending_payments: u32,
    /// Total overdue amount.
    pub overdue_amount: f64,
    /// Revenue per calendar month, January first.
    pub monthly_revenue: Vec<f64>,
    /// Payment counts and amounts per method.
    pub payment_method_breakdown: Vec<MethodBreakdown>,
}

/// Bar heights for the monthly revenue chart, as percentages of the best
/// month. All zeros when there is no revenue at all.
pub fn revenue_bar_heights(monthly_revenue: &[f64]) -> Vec<f64> {
    let max = monthly_revenue.iter().copied().fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return vec![0.0; monthly_revenue.len()];
    }

    monthly_revenue
        .iter()
        .map(|revenue| revenue / max * 100.0)
        .collect()
}

/// Each method's share of the total payment count, as percentages in the
/// same order as `breakdown`. All zeros when there are no payments.
pub fn method_count_shares(breakdown: &[MethodBreakdown]) -> Vec<f64> {
    let total: u32 = breakdown.iter().map(|method| method.count).sum();

    if total == 0 {
        return vec![0.0; breakdown.len()];
    }

    breakdown
        .iter()
        .map(|method| f64::from(method.count) / f64::from(total) * 100.0)
        .collect()
}

#[cfg(test)]
mod dashboard_tests {
    use crate::fixtures;

    use super::{MethodBreakdown, method_count_shares, revenue_bar_heights};

    #[test]
    fn bar_heights_are_relative_to_the_best_month() {
        let heights = revenue_bar_heights(&[15000.0, 30000.0, 7500.0]);

        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
    }

    #[test]
    fn bar_heights_are_zero_without_revenue() {
        assert_eq!(revenue_bar_heights(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(revenue_bar_heights(&[]).is_empty());
    }

    #[test]
    fn method_shares_sum_to_one_hundred_percent() {
        let stats = fixtures::dashboard_stats();

        let shares = method_count_shares(&stats.payment_method_breakdown);

        let total: f64 = shares.iter().sum();
        assert!((total - 100.0).abs() < 1e-9, "shares sum to {total}");
    }

    #[test]
    fn method_shares_are_zero_without_payments() {
        let breakdown = vec![MethodBreakdown {
            method: "Cash".to_string(),
            count: 0,
            amount: 0.0,
        }];

        assert_eq!(method_count_shares(&breakdown), vec![0.0]);
    }

    #[test]
    fn fixture_stats_cover_a_full_year() {
        let stats = fixtures::dashboard_stats();

        assert_eq!(stats.monthly_revenue.len(), super::MONTH_LABELS.len());
    }
}
