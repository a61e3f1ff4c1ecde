//! Defines the app level error type.
//!
//! Expected outcomes such as a wrong password are not errors; they are
//! modelled as enum outcomes on the operations that produce them (see
//! [crate::auth::LogInOutcome]).

use thiserror::Error;

/// The errors that may occur in the application.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The persisted session entry exists but could not be parsed.
    ///
    /// Callers should discard the entry and treat the user as logged out.
    /// This error must never escalate to a logged-in state.
    #[error("the persisted session entry is malformed: {0}")]
    MalformedSession(String),

    /// The session store could not be read from or written to.
    ///
    /// The underlying error is kept as a string so the app error type stays
    /// comparable in tests.
    #[error("session store error: {0}")]
    SessionStore(String),

    /// A required text field was empty when a draft was saved.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A negative value was used where a non-negative currency amount is
    /// required.
    #[error("{0} is not a valid currency amount")]
    NegativeAmount(f64),

    /// Tried to update a student that does not exist
    #[error("tried to update a student that is not in the store")]
    UpdateMissingStudent,

    /// Tried to delete a student that does not exist
    #[error("tried to delete a student that is not in the store")]
    DeleteMissingStudent,

    /// Tried to update a fee category that does not exist
    #[error("tried to update a fee category that is not in the store")]
    UpdateMissingFeeCategory,

    /// Tried to delete a fee category that does not exist
    #[error("tried to delete a fee category that is not in the store")]
    DeleteMissingFeeCategory,

    /// Tried to update a payment that does not exist
    #[error("tried to update a payment that is not in the store")]
    UpdateMissingPayment,

    /// Tried to delete a payment that does not exist
    #[error("tried to delete a payment that is not in the store")]
    DeleteMissingPayment,
}
