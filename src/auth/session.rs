//! The session manager owns the authenticated-user lifecycle: the one-time
//! session restore at startup, credential checks on log-in, and clearing the
//! persisted entry on log-out.

use std::time::Duration;

use crate::{
    Error,
    auth::{Credential, SessionStore, User, verify_credentials},
};

/// The artificial latency applied to log-in attempts.
///
/// The delay models the round trip a real backend would add. It is a UX
/// affordance only; correctness never depends on it and tests run with
/// [Duration::ZERO].
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_secs(1);

/// The message shown when the submitted credentials match no known user.
pub const INVALID_CREDENTIALS_MSG: &str = "Invalid username or password";

/// The message shown when the username or password field is empty.
pub const MISSING_CREDENTIALS_MSG: &str = "Please enter both username and password";

/// The authentication state of the application.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The persisted session entry has not been checked yet.
    Initializing,
    /// A user is logged in.
    Authenticated(User),
    /// No user is logged in.
    Unauthenticated,
}

/// The result of a log-in attempt that ran to completion.
///
/// Invalid and missing credentials are expected outcomes, not faults, so they
/// live here rather than on [Error].
#[derive(Debug, Clone, PartialEq)]
pub enum LogInOutcome {
    /// The credentials matched and the session was persisted.
    Success(User),
    /// The credentials matched no known user.
    InvalidCredentials,
    /// The username or password field was empty; no credential check was run.
    MissingCredentials,
}

impl LogInOutcome {
    /// The user-facing message for a failed attempt, or [None] on success.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LogInOutcome::Success(_) => None,
            LogInOutcome::InvalidCredentials => Some(INVALID_CREDENTIALS_MSG),
            LogInOutcome::MissingCredentials => Some(MISSING_CREDENTIALS_MSG),
        }
    }
}

/// The state machine answering "is there a logged-in user?".
///
/// The manager assumes a single caller: the UI disables the submit control
/// while a log-in is in flight, so at most one attempt runs at a time and no
/// internal locking is needed. State transitions are atomic with respect to
/// that single caller.
#[derive(Debug)]
pub struct SessionManager<S: SessionStore> {
    store: S,
    credentials: Vec<Credential>,
    login_delay: Duration,
    state: SessionState,
}

impl<S: SessionStore> SessionManager<S> {
    /// Create a manager in the [SessionState::Initializing] state.
    ///
    /// Call [SessionManager::initialize] once at startup to restore any
    /// persisted session.
    pub fn new(store: S, credentials: Vec<Credential>) -> Self {
        Self {
            store,
            credentials,
            login_delay: DEFAULT_LOGIN_DELAY,
            state: SessionState::Initializing,
        }
    }

    /// Override the artificial log-in delay.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// The current authentication state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Check the persisted session entry and leave the initializing state.
    ///
    /// Runs the check only on the first call; later calls return the current
    /// state unchanged. A present, parseable entry restores
    /// [SessionState::Authenticated]; a malformed entry is discarded from the
    /// store; a read error is treated as "no session". The failure direction
    /// is always towards logged out, never towards logged in.
    pub fn initialize(&mut self) -> &SessionState {
        if self.state != SessionState::Initializing {
            return &self.state;
        }

        self.state = match self.store.read() {
            Ok(Some(user)) => {
                tracing::info!("restored session for {}", user.username);
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(Error::MalformedSession(reason)) => {
                tracing::warn!("discarding malformed session entry: {reason}");
                if let Err(error) = self.store.clear() {
                    tracing::warn!("could not discard session entry: {error}");
                }
                SessionState::Unauthenticated
            }
            Err(error) => {
                tracing::warn!("could not read session entry, treating as no session: {error}");
                SessionState::Unauthenticated
            }
        };

        &self.state
    }

    /// Attempt to log in with `username` and `password`.
    ///
    /// Empty fields are rejected before any credential check. Otherwise the
    /// attempt waits out the configured artificial delay, then checks the
    /// fixed credential list with exact case-sensitive equality on both
    /// fields. On a match the user record is persisted to the session store
    /// before the state transitions to [SessionState::Authenticated].
    ///
    /// Once invoked the attempt always runs to completion; there is no
    /// cancellation.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::SessionStore] if the matched user
    /// could not be persisted. The state is left [SessionState::Unauthenticated]
    /// in that case: a session that cannot be persisted is a failed log-in,
    /// not a silent success.
    pub async fn log_in(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<LogInOutcome, Error> {
        if username.is_empty() || password.is_empty() {
            return Ok(LogInOutcome::MissingCredentials);
        }

        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        let Some(user) = verify_credentials(&self.credentials, username, password) else {
            tracing::info!("failed log-in attempt for {username}");
            self.state = SessionState::Unauthenticated;
            return Ok(LogInOutcome::InvalidCredentials);
        };
        let user = user.clone();

        if let Err(error) = self.store.write(&user) {
            tracing::error!("could not persist session for {username}: {error}");
            self.state = SessionState::Unauthenticated;
            return Err(error);
        }

        tracing::info!("{username} logged in as {}", user.role);
        self.state = SessionState::Authenticated(user.clone());

        Ok(LogInOutcome::Success(user))
    }

    /// Log out: clear the persisted entry and become unauthenticated.
    ///
    /// Always succeeds regardless of prior state. A store error while
    /// clearing is logged and swallowed; the in-process state transitions
    /// unconditionally.
    pub fn log_out(&mut self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!("could not clear session entry: {error}");
        }

        self.state = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod session_manager_tests {
    use std::time::Duration;

    use crate::{
        Error,
        auth::{InMemorySessionStore, LogInOutcome, SessionState, SessionStore},
        fixtures,
    };

    use super::SessionManager;

    fn test_manager(store: InMemorySessionStore) -> SessionManager<InMemorySessionStore> {
        SessionManager::new(store, fixtures::mock_users()).with_login_delay(Duration::ZERO)
    }

    #[test]
    fn initialize_with_no_entry_is_unauthenticated() {
        let mut manager = test_manager(InMemorySessionStore::new());

        assert_eq!(manager.initialize(), &SessionState::Unauthenticated);
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn initialize_with_valid_entry_restores_the_user() {
        let raw = r#"{"id":"1","username":"admin","email":"admin@school.edu","role":"admin","name":"Administrator"}"#;
        let mut manager = test_manager(InMemorySessionStore::with_entry(raw));

        manager.initialize();

        assert_eq!(
            manager.current_user().map(|user| user.username.as_str()),
            Some("admin")
        );
    }

    #[test]
    fn initialize_discards_malformed_entry() {
        let mut manager = test_manager(InMemorySessionStore::with_entry("{\"id\": oops"));

        assert_eq!(manager.initialize(), &SessionState::Unauthenticated);

        // The corrupt entry must be gone so the next startup is clean.
        assert_eq!(manager.store.read(), Ok(None));
    }

    #[test]
    fn initialize_runs_the_store_check_only_once() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        // A session appearing in the store later must not flip the state.
        let raw = r#"{"id":"1","username":"admin","email":"admin@school.edu","role":"admin","name":"Administrator"}"#;
        manager.store = InMemorySessionStore::with_entry(raw);

        assert_eq!(manager.initialize(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn log_in_succeeds_with_fixture_credentials() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        let outcome = manager.log_in("admin", "admin123").await.unwrap();

        match outcome {
            LogInOutcome::Success(user) => assert_eq!(user.username, "admin"),
            other => panic!("want Success, got {other:?}"),
        }
        assert!(manager.is_authenticated());
    }

    #[tokio::test]
    async fn log_in_persists_the_user_without_the_password() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        manager.log_in("accountant", "acc123").await.unwrap();

        let raw = manager.store.raw_entry().expect("session entry not written");
        assert!(raw.contains("\"username\":\"accountant\""));
        assert!(!raw.contains("password"));
        assert!(!raw.contains("acc123"));
    }

    #[tokio::test]
    async fn log_in_fails_with_unknown_credentials() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        let outcome = manager.log_in("admin", "wrongpassword").await.unwrap();

        assert_eq!(outcome, LogInOutcome::InvalidCredentials);
        assert_eq!(manager.state(), &SessionState::Unauthenticated);
        assert!(!manager.store.has_entry());
    }

    #[tokio::test]
    async fn log_in_rejects_empty_fields_before_checking_credentials() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        let no_username = manager.log_in("", "admin123").await.unwrap();
        let no_password = manager.log_in("admin", "").await.unwrap();

        assert_eq!(no_username, LogInOutcome::MissingCredentials);
        assert_eq!(no_password, LogInOutcome::MissingCredentials);
        assert_eq!(manager.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn log_in_surfaces_store_write_failure() {
        let mut manager = test_manager(InMemorySessionStore::new().failing_writes());
        manager.initialize();

        let result = manager.log_in("admin", "admin123").await;

        assert!(matches!(result, Err(Error::SessionStore(_))));
        assert_eq!(manager.state(), &SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn log_out_clears_the_entry_and_state() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();
        manager.log_in("staff", "staff123").await.unwrap();

        manager.log_out();

        assert_eq!(manager.state(), &SessionState::Unauthenticated);
        assert!(!manager.store.has_entry());
    }

    #[test]
    fn log_out_without_a_session_is_a_no_op() {
        let mut manager = test_manager(InMemorySessionStore::new());
        manager.initialize();

        manager.log_out();

        assert_eq!(manager.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn outcome_messages_match_the_login_form() {
        assert_eq!(
            LogInOutcome::InvalidCredentials.error_message(),
            Some(super::INVALID_CREDENTIALS_MSG)
        );
        assert_eq!(
            LogInOutcome::MissingCredentials.error_message(),
            Some(super::MISSING_CREDENTIALS_MSG)
        );
    }
}
