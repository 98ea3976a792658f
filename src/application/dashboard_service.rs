// Dashboard service - Publish a dashboard document into an organisation
use crate::application::grafana_repository::{DashboardRepository, PublishStatus};
use crate::domain::dashboard::{publish_body, render_template, Dashboard};
use crate::domain::error::ProvisionError;
use crate::domain::organisation::ResolvedOrganisation;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Accepted by the first attempt, with overwrite set
    Overwritten,
    /// Accepted by the create-new fallback after a not-found
    Created,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn reconcile(
        &self,
        org: &ResolvedOrganisation<'_>,
        name: &str,
        definition: &Dashboard,
    ) -> anyhow::Result<DashboardAction> {
        let api_key = org.api_key()?;

        let original = tokio::fs::read_to_string(&definition.file)
            .await
            .map_err(|source| ProvisionError::Read {
                path: definition.file.clone(),
                source,
            })?;
        let rendered = render_template(&original, org.dashboard_vars());

        let request = publish_body(&rendered, true);
        tracing::debug!(
            "Posting dashboard \"{}\" ({}) to org {}",
            name,
            definition.name,
            org.id
        );
        match self.repository.publish_dashboard(api_key, &request).await? {
            PublishStatus::Published => {
                tracing::debug!("Posted \"{}\" as overwrite", name);
                Ok(DashboardAction::Overwritten)
            }
            PublishStatus::NotFound { .. } => {
                // The create-new fallback posts the file as read, without substitution.
                let request = publish_body(&original, false);
                tracing::debug!("Posting dashboard \"{}\" to org {} as new", name, org.id);
                match self.repository.publish_dashboard(api_key, &request).await? {
                    PublishStatus::Published => {
                        tracing::debug!("Posted \"{}\" as new", name);
                        Ok(DashboardAction::Created)
                    }
                    PublishStatus::NotFound { body } => {
                        Err(rejected("404 Not Found".to_string(), &body, &request))
                    }
                    PublishStatus::Rejected { status, body } => Err(rejected(status, &body, &request)),
                }
            }
            PublishStatus::Rejected { status, body } => Err(rejected(status, &body, &request)),
        }
    }
}

fn rejected(status: String, response: &str, request: &str) -> anyhow::Error {
    tracing::debug!("Failed response body: {}", response);
    tracing::debug!("Failed request body: {}", request);
    ProvisionError::Status(status).into()
}
