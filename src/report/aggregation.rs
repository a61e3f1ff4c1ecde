//! Payment aggregation for the reports screen.
//!
//! Pure, side-effect-free transformation of a payment list into display
//! totals. The input is never mutated and the function is total: an empty
//! list yields a summary of zeros, never an error.

use std::collections::HashMap;

use time::Date;

use crate::{
    payment::{Payment, PaymentMethod, PaymentStatus},
    report::Period,
};

/// The aggregates displayed on the reports screen for one period.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSummary {
    /// How many payments fell inside the period.
    pub filtered_count: usize,
    /// Sum of all amounts in the period, regardless of status.
    ///
    /// Pending and failed amounts are included; this is the figure the
    /// reports screen has always shown.
    pub total_revenue: f64,
    /// How many payments in the period are completed.
    pub completed_count: usize,
    /// How many payments in the period are pending.
    pub pending_count: usize,
    /// Summed amount per payment method. Methods with no payments in the
    /// period have no entry.
    pub payment_method_breakdown: HashMap<PaymentMethod, f64>,
    /// Number of payments referencing each fee category name. A payment
    /// covering two categories increments both counts; this counts payments,
    /// not amounts.
    pub fee_category_breakdown: HashMap<String, usize>,
    /// Completed payments as a percentage of the period's payments, rounded
    /// to one decimal place. Zero when the period is empty.
    pub collection_rate: f64,
    /// Mean payment amount rounded to the nearest whole currency unit. Zero
    /// when the period is empty.
    pub average_payment: f64,
}

/// Aggregate `payments` falling inside `period` relative to `now`.
///
/// The reference date is injected rather than read from a clock so results
/// are reproducible; calling twice with the same inputs yields the same
/// summary.
pub fn aggregate(payments: &[Payment], period: Period, now: Date) -> ReportSummary {
    let filtered: Vec<&Payment> = payments
        .iter()
        .filter(|payment| period.contains(payment.payment_date, now))
        .collect();

    let total_revenue: f64 = filtered.iter().map(|payment| payment.amount).sum();
    let completed_count = filtered
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Completed)
        .count();
    let pending_count = filtered
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Pending)
        .count();

    let mut payment_method_breakdown = HashMap::new();
    for payment in &filtered {
        *payment_method_breakdown
            .entry(payment.payment_method)
            .or_insert(0.0) += payment.amount;
    }

    let mut fee_category_breakdown: HashMap<String, usize> = HashMap::new();
    for payment in &filtered {
        for category in &payment.fee_categories {
            *fee_category_breakdown.entry(category.clone()).or_insert(0) += 1;
        }
    }

    let filtered_count = filtered.len();
    let (collection_rate, average_payment) = if filtered_count == 0 {
        (0.0, 0.0)
    } else {
        let rate = completed_count as f64 / filtered_count as f64 * 100.0;
        (
            (rate * 10.0).round() / 10.0,
            (total_revenue / filtered_count as f64).round(),
        )
    };

    ReportSummary {
        filtered_count,
        total_revenue,
        completed_count,
        pending_count,
        payment_method_breakdown,
        fee_category_breakdown,
        collection_rate,
        average_payment,
    }
}
