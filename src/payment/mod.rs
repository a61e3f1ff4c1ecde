//! Payment logging.
//!
//! A payment records money received from a student against one or more fee
//! categories. The student name and the category names are denormalized
//! free-text copies taken at creation time; they are not kept in sync with
//! later edits to the student or category records.

mod core;
mod store;

pub use core::{Payment, PaymentDraft, PaymentMethod, PaymentStatus};
pub use store::{InMemoryPaymentStore, StatusFilter};
