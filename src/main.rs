use actix::prelude::*;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use company_directory::actors::{ChangeEmail, DirectoryActor, GetCompany, GetUser, ListUsers};
use company_directory::config::{AppConfig, DEFAULT_LOG_FILTER};
use company_directory::domain::directory::EmailChangeWorkflow;
use company_directory::messaging::ConsoleNotifier;
use company_directory::metrics::Metrics;
use company_directory::store::RecordStore;

#[actix::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, overridable with RUST_LOG
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "Starting company directory");

    // === 1. Build the store ===
    let store = Arc::new(RecordStore::from_seed(config.load_seed()?));
    let company = store.get_company();
    tracing::info!(
        users = store.list_users().len(),
        domain = %company.domain(),
        employee_count = company.employee_count(),
        "Record store seeded"
    );
    if company.employee_count() as usize != store.employee_tally() {
        tracing::warn!(
            employee_count = company.employee_count(),
            employees = store.employee_tally(),
            "Seed employee count does not match classified users"
        );
    }

    // === 2. Wire workflow, metrics and actor ===
    let metrics = Arc::new(Metrics::new()?);
    metrics.set_employee_count(company.employee_count());
    let workflow = EmailChangeWorkflow::new(store.clone(), Arc::new(ConsoleNotifier::stdout()))
        .with_metrics(metrics.clone());
    let directory = DirectoryActor::new(Arc::new(workflow)).start();

    // === 3. Run the email change ===
    let outcome = directory
        .send(ChangeEmail {
            user_id: config.demo_user_id.clone(),
            new_email: config.demo_email.clone(),
        })
        .await??;
    tracing::info!(?outcome, "Email change finished");

    // === 4. Report resulting state ===
    let user = directory
        .send(GetUser {
            user_id: config.demo_user_id.clone(),
        })
        .await?;
    let company = directory.send(GetCompany).await?;
    tracing::info!(?user, "User after change");
    tracing::info!(?company, "Company after change");

    for user in directory.send(ListUsers).await? {
        tracing::debug!(
            user_id = %user.id(),
            email = ?user.email(),
            classification = %user.classification(),
            "Directory entry"
        );
    }
    tracing::debug!(metrics = %metrics.render()?, "Metrics snapshot");

    Ok(())
}
