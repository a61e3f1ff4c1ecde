//! Authentication and the session lifecycle.
//!
//! This module contains everything related to the logged-in user:
//! - The `User` model and the fixed credential list it is checked against
//! - The `SessionStore` trait and its file-backed implementation, the single
//!   piece of persisted state in the application
//! - The `SessionManager` state machine that owns log-in and log-out

mod credentials;
mod session;
mod session_store;
mod user;

pub use credentials::{Credential, verify_credentials};
pub use session::{
    DEFAULT_LOGIN_DELAY, INVALID_CREDENTIALS_MSG, LogInOutcome, MISSING_CREDENTIALS_MSG,
    SessionManager, SessionState,
};
pub use session_store::{
    InMemorySessionStore, JsonFileSessionStore, SESSION_FILE_NAME, SessionStore,
};
pub use user::{Role, User};
