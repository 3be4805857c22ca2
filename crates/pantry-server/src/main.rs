//! Pantry Server — builds the dashboard for one organization and
//! writes it to stdout as JSON.
//!
//! Usage: `pantry-server <organization-short-name>`

use std::process::ExitCode;

use pantry_core::error::{PantryError, PantryResult};
use pantry_core::repository::OrganizationRepository;
use pantry_dashboard::{DashboardConfig, DashboardService};
use pantry_db::repository::SurrealOrganizationRepository;
use pantry_db::{DbConfig, DbManager, SurrealDashboardSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pantry_server=info,pantry_db=info,pantry_dashboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    let Some(short_name) = std::env::args().nth(1) else {
        tracing::error!("Usage: pantry-server <organization-short-name>");
        return ExitCode::from(2);
    };

    match run(&short_name).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%short_name, error = %err, "Dashboard build failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(short_name: &str) -> PantryResult<()> {
    let db_config = DbConfig::from_env();
    let dashboard_config = DashboardConfig::from_env();

    let manager = DbManager::connect(&db_config)
        .await
        .map_err(|e| PantryError::Unavailable(e.to_string()))?;
    let db = manager.client().clone();
    pantry_db::run_migrations(&db).await?;

    let organizations = SurrealOrganizationRepository::new(db.clone());
    let organization = organizations.get_by_short_name(short_name).await?;

    tracing::info!(
        organization_id = %organization.id,
        name = %organization.name,
        "Building dashboard"
    );

    let service = DashboardService::new(
        SurrealDashboardSource::new(db),
        organizations,
        dashboard_config,
    );
    let snapshot = service.build(organization.id).await?;

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| PantryError::Internal(format!("serialize snapshot: {e}")))?;
    println!("{json}");

    Ok(())
}
