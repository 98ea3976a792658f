// Main entry point - Dependency injection and a single bootstrap run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::bootstrap_service::BootstrapService;
use crate::application::dashboard_service::DashboardService;
use crate::application::datasource_service::DatasourceService;
use crate::application::organisation_service::OrganisationService;
use crate::infrastructure::config::{load_bootstrap_config, load_connection_settings};
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::presentation::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --debug-logging
    let level = if cli.debug_logging { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config = load_bootstrap_config(&cli.config)?;
    let settings = load_connection_settings(cli.endpoint, cli.user, cli.pass)?;

    // One client serves both the admin and the org-scoped endpoints
    let client = Arc::new(GrafanaClient::new(&settings)?);

    let service = BootstrapService::new(
        OrganisationService::new(client.clone()),
        DatasourceService::new(client.clone()),
        DashboardService::new(client),
    );

    let report = service.run(&config).await?;
    tracing::info!(
        "Bootstrap finished: {} organisations, {} datasources, {} dashboards published, {} dashboards failed",
        report.organisations,
        report.datasources,
        report.dashboards_published,
        report.dashboard_failures.len()
    );

    Ok(())
}
