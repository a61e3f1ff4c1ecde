//! Student record management.
//!
//! This module contains the `Student` model, the draft type used by the
//! add/edit forms, and the in-memory store that owns the student list.

mod core;
mod store;

pub use core::{Student, StudentDraft, StudentStatus};
pub use store::InMemoryStudentStore;
