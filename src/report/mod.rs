//! Reporting over the payment list.
//!
//! This module contains:
//! - The `Period` selector and its calendar-window semantics
//! - The pure aggregation that turns a payment list into display totals
//!
//! Everything here is recomputed from scratch on every call against an
//! injected reference date; there is no cache and no global clock.

mod aggregation;
mod period;

pub use aggregation::{ReportSummary, aggregate};
pub use period::Period;
