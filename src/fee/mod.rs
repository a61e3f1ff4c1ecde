//! Fee category configuration.
//!
//! Fee categories are named, priced billing line items with a recurrence
//! frequency and a mandatory flag. Payments reference them by free-text name,
//! not by ID, so renaming a category does not propagate to existing payments.

mod core;
mod store;

pub use core::{FeeCategory, FeeCategoryDraft, Frequency};
pub use store::{FrequencySummary, InMemoryFeeCategoryStore};
