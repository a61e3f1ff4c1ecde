//! The state shared by every screen of the application.

use crate::{
    auth::{JsonFileSessionStore, SessionManager, SessionStore},
    config::AppConfig,
    dashboard::DashboardStats,
    fee::InMemoryFeeCategoryStore,
    fixtures,
    outstanding::OutstandingDue,
    payment::InMemoryPaymentStore,
    student::InMemoryStudentStore,
};

/// Everything the application holds in memory while running.
///
/// One instance owns all entity stores and the session manager; screens
/// borrow from it rather than reaching for globals. The stores start from the
/// mock dataset and their contents live only as long as the process.
#[derive(Debug)]
pub struct AppState<S: SessionStore> {
    /// The student roster.
    pub students: InMemoryStudentStore,
    /// The configured fee categories.
    pub fee_categories: InMemoryFeeCategoryStore,
    /// The payment log.
    pub payments: InMemoryPaymentStore,
    /// The pre-aggregated outstanding dues list. Read-only; it is not derived
    /// from the payment log.
    pub outstanding_dues: Vec<OutstandingDue>,
    /// The pre-aggregated dashboard overview numbers.
    pub dashboard_stats: DashboardStats,
    /// The authenticated-user lifecycle.
    pub session: SessionManager<S>,
}

impl<S: SessionStore> AppState<S> {
    /// Create the application state seeded from the mock dataset, persisting
    /// sessions through `session_store`.
    ///
    /// The session manager starts in its initializing state; call
    /// [SessionManager::initialize] on [AppState::session] before reading the
    /// authentication state.
    pub fn seeded(session_store: S, login_delay: std::time::Duration) -> Self {
        Self {
            students: InMemoryStudentStore::new(fixtures::students()),
            fee_categories: InMemoryFeeCategoryStore::new(fixtures::fee_categories()),
            payments: InMemoryPaymentStore::new(fixtures::payments()),
            outstanding_dues: fixtures::outstanding_dues(),
            dashboard_stats: fixtures::dashboard_stats(),
            session: SessionManager::new(session_store, fixtures::mock_users())
                .with_login_delay(login_delay),
        }
    }
}

impl AppState<JsonFileSessionStore> {
    /// Create the application state from `config`, persisting sessions in a
    /// JSON file at the configured path.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::seeded(
            JsonFileSessionStore::new(&config.session_path),
            config.login_delay,
        )
    }
}
