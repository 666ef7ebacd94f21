//! Matricula service binary.
//!
//! Wires the Google Sheets grid client and the mail notifier into the
//! ledger, then serves the HTTP API until ctrl-c.

#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use matricula_api::{AppState, router};
use matricula_grid::GridClient;
use matricula_ledger::{CourseCatalog, RegistrationLedger};
use matricula_notify::{MailApiNotifier, Notifier};
use matricula_sheets::{ServiceAccountKey, SheetsClient, TokenProvider};
use tracing_subscriber::EnvFilter;

/// Course enrollment service over a spreadsheet ledger.
#[derive(Parser, Debug)]
#[command(name = "matricula", version, about, long_about = None)]
struct Args {
    /// Address to serve the HTTP API on.
    #[arg(long, env = "MATRICULA_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Spreadsheet holding the registration and course sheets.
    #[arg(long, env = "MATRICULA_SPREADSHEET_ID")]
    spreadsheet_id: String,

    /// Sheet title for registration rows.
    #[arg(long, env = "MATRICULA_REGISTRATIONS_SHEET", default_value = "Registrations")]
    registrations_sheet: String,

    /// Sheet title for the course catalog.
    #[arg(long, env = "MATRICULA_COURSES_SHEET", default_value = "Courses")]
    courses_sheet: String,

    /// Path to the Google service-account JSON key file.
    #[arg(long, env = "MATRICULA_GOOGLE_KEY_FILE")]
    google_key_file: PathBuf,

    /// Mail-delivery endpoint confirmations are POSTed to.
    #[arg(long, env = "MATRICULA_MAIL_ENDPOINT")]
    mail_endpoint: String,

    /// Bearer token for the mail endpoint.
    #[arg(long, env = "MATRICULA_MAIL_TOKEN", hide_env_values = true)]
    mail_token: String,

    /// Sender address on confirmation messages.
    #[arg(long, env = "MATRICULA_MAIL_FROM")]
    mail_from: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let key = ServiceAccountKey::from_file(&args.google_key_file)?;
    let tokens = Arc::new(TokenProvider::new(key));
    let grid: Arc<dyn GridClient> =
        Arc::new(SheetsClient::new(args.spreadsheet_id.clone(), tokens));
    let notifier: Arc<dyn Notifier> = Arc::new(MailApiNotifier::new(
        args.mail_endpoint,
        args.mail_token,
        args.mail_from,
    ));

    let state = AppState {
        ledger: Arc::new(RegistrationLedger::new(
            grid.clone(),
            notifier,
            args.registrations_sheet,
        )),
        catalog: Arc::new(CourseCatalog::new(grid, args.courses_sheet)),
    };

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(bind = %args.bind, spreadsheet = %args.spreadsheet_id, "matricula listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
