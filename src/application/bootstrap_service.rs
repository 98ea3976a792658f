// Bootstrap service - Reconcile every configured organisation in order
use crate::application::dashboard_service::DashboardService;
use crate::application::datasource_service::DatasourceService;
use crate::application::organisation_service::OrganisationService;
use crate::domain::organisation::ResolvedOrganisation;
use crate::infrastructure::config::BootstrapConfig;
use anyhow::Context;

/// A dashboard that could not be published; the run carried on without it
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFailure {
    pub organisation: String,
    pub dashboard: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapReport {
    pub organisations: usize,
    pub datasources: usize,
    pub dashboards_published: usize,
    pub dashboard_failures: Vec<DashboardFailure>,
}

#[derive(Clone)]
pub struct BootstrapService {
    organisations: OrganisationService,
    datasources: DatasourceService,
    dashboards: DashboardService,
}

impl BootstrapService {
    pub fn new(
        organisations: OrganisationService,
        datasources: DatasourceService,
        dashboards: DashboardService,
    ) -> Self {
        Self {
            organisations,
            datasources,
            dashboards,
        }
    }

    /// Organisation and datasource errors abort the run. Dashboard errors
    /// are logged, recorded in the report, and skipped.
    pub async fn run(&self, config: &BootstrapConfig) -> anyhow::Result<BootstrapReport> {
        let mut report = BootstrapReport::default();

        for org in &config.organisations {
            let id = self.organisations.resolve(&org.name).await?;
            report.organisations += 1;
            let resolved = ResolvedOrganisation::new(id, org);

            for name in &org.datasources {
                tracing::debug!("Creating/Updating datasource \"{}\" for Org {}", name, resolved.id);
                let definition = config.datasource(org, name)?;
                let action = self
                    .datasources
                    .reconcile(&resolved, name, definition)
                    .await
                    .with_context(|| {
                        format!("datasource \"{}\" in organisation \"{}\"", name, org.name)
                    })?;
                tracing::debug!("Datasource \"{}\": {:?}", name, action);
                report.datasources += 1;
            }

            for name in &org.dashboards {
                tracing::debug!("Creating/Updating dashboard \"{}\" for Org {}", name, resolved.id);
                let outcome = match config.dashboard(org, name) {
                    Ok(definition) => self.dashboards.reconcile(&resolved, name, definition).await,
                    Err(e) => Err(e.into()),
                };
                match outcome {
                    Ok(action) => {
                        tracing::debug!("Dashboard \"{}\": {:?}", name, action);
                        report.dashboards_published += 1;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Dashboard \"{}\" in organisation \"{}\" failed: {:#}",
                            name,
                            org.name,
                            e
                        );
                        report.dashboard_failures.push(DashboardFailure {
                            organisation: org.name.clone(),
                            dashboard: name.clone(),
                            error: format!("{:#}", e),
                        });
                    }
                }
            }
        }

        Ok(report)
    }
}
