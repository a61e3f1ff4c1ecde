//! Outstanding dues.
//!
//! Outstanding dues arrive pre-aggregated as a read-only fixture; nothing in
//! the application derives them from the payment list, and the two can
//! disagree.

use serde::{Deserialize, Serialize};
use time::Date;

/// One unpaid fee line within an outstanding due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLineItem {
    /// The name of the unpaid fee category.
    pub category_name: String,
    /// The unpaid amount.
    pub amount: f64,
    /// When the fee was due.
    pub due_date: Date,
}

/// A student's unpaid balance and how long it has been overdue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingDue {
    /// The ID of the student who owes.
    pub student_id: String,
    /// The student's name, denormalized like everywhere else.
    pub student_name: String,
    /// The class and section, e.g. "11th A".
    pub class: String,
    /// The total unpaid amount across all lines.
    pub total_due: f64,
    /// How many days the oldest line is overdue.
    pub overdue_days: u32,
    /// The unpaid lines making up the total.
    pub fee_breakdown: Vec<FeeLineItem>,
}

/// The total unpaid amount across all `dues`.
pub fn total_outstanding(dues: &[OutstandingDue]) -> f64 {
    dues.iter().map(|due| due.total_due).sum()
}

#[cfg(test)]
mod outstanding_tests {
    use crate::fixtures;

    use super::total_outstanding;

    #[test]
    fn total_sums_all_dues() {
        let dues = fixtures::outstanding_dues();

        assert_eq!(total_outstanding(&dues), 100.0);
    }

    #[test]
    fn total_of_no_dues_is_zero() {
        assert_eq!(total_outstanding(&[]), 0.0);
    }
}
