//! EduPay is the domain core of a school billing administration system:
//! student records, fee category configuration, payment logging and simple
//! reporting.
//!
//! The crate deliberately has no network or database layer. Entity lists live
//! in in-memory stores seeded from a mock dataset, the only persisted state is
//! a single JSON session entry, and all reporting is recomputed from scratch
//! on every call.

#![warn(missing_docs)]

pub mod app_state;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod fee;
pub mod fixtures;
pub mod outstanding;
pub mod payment;
pub mod report;
pub mod student;

mod error;
mod ids;

pub use app_state::AppState;
pub use config::AppConfig;
pub use error::Error;
