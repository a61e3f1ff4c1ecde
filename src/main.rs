//! Command-line entry point for the school billing demo.
//!
//! Restores or establishes a session, then prints a payment report for the
//! chosen period plus the outstanding dues total. Sessions persist across
//! runs through a JSON file, so a second invocation without credentials
//! reuses the previous log-in.

use std::{path::PathBuf, process::exit, time::Duration};

use clap::Parser;
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edupay_rs::{
    AppConfig, AppState,
    auth::SESSION_FILE_NAME,
    outstanding::total_outstanding,
    report::{Period, aggregate},
};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path of the file persisting the session between runs.
    #[arg(long, default_value = SESSION_FILE_NAME)]
    session_file: PathBuf,

    /// Username to log in with when no session is persisted.
    #[arg(long)]
    username: Option<String>,

    /// Password to log in with when no session is persisted.
    #[arg(long)]
    password: Option<String>,

    /// The reporting period to aggregate payments over.
    #[arg(long, value_enum, default_value_t = Period::ThisMonth)]
    period: Period,

    /// Artificial log-in latency in milliseconds.
    #[arg(long, default_value_t = 1000)]
    login_delay_ms: u64,

    /// Clear the persisted session and exit.
    #[arg(long)]
    log_out: bool,
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let config = AppConfig::new(args.session_file)
        .with_login_delay(Duration::from_millis(args.login_delay_ms));
    let mut state = AppState::from_config(&config);

    state.session.initialize();

    if args.log_out {
        state.session.log_out();
        tracing::info!("logged out");
        return;
    }

    if !state.session.is_authenticated() {
        let (Some(username), Some(password)) = (&args.username, &args.password) else {
            tracing::error!("no session persisted; pass --username and --password to log in");
            exit(1);
        };

        match state.session.log_in(username, password).await {
            Ok(outcome) => {
                if let Some(message) = outcome.error_message() {
                    tracing::error!("{message}");
                    exit(1);
                }
            }
            Err(error) => {
                tracing::error!("log-in failed: {error}");
                exit(1);
            }
        }
    }

    let user = state
        .session
        .current_user()
        .expect("authenticated session has a user");
    tracing::info!("signed in as {} ({})", user.name, user.role);

    let today = OffsetDateTime::now_utc().date();
    let summary = aggregate(state.payments.get_all(), args.period, today);

    tracing::info!(
        "{}: {} payments, revenue {:.2}, {} completed, {} pending",
        args.period.label(),
        summary.filtered_count,
        summary.total_revenue,
        summary.completed_count,
        summary.pending_count,
    );
    tracing::info!(
        "collection rate {:.1}%, average payment {:.0}",
        summary.collection_rate,
        summary.average_payment,
    );

    for (method, amount) in &summary.payment_method_breakdown {
        tracing::info!("  {method}: {amount:.2}");
    }

    tracing::info!(
        "outstanding dues: {:.2} across {} students",
        total_outstanding(&state.outstanding_dues),
        state.outstanding_dues.len(),
    );
}
