// Organisation service - Resolve an organisation's id, creating it if absent
use crate::application::grafana_repository::OrganisationRepository;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrganisationService {
    repository: Arc<dyn OrganisationRepository>,
}

impl OrganisationService {
    pub fn new(repository: Arc<dyn OrganisationRepository>) -> Self {
        Self { repository }
    }

    /// Any lookup failure falls through to creation. Creation failure is final.
    pub async fn resolve(&self, name: &str) -> anyhow::Result<i64> {
        match self.repository.find_organisation(name).await {
            Ok(id) => {
                tracing::debug!("Organisation \"{}\" exists with ID {}", name, id);
                Ok(id)
            }
            Err(e) => {
                tracing::debug!("Organisation \"{}\" lookup failed ({:#}), creating it", name, e);
                let id = self
                    .repository
                    .create_organisation(name)
                    .await
                    .with_context(|| format!("failed to create organisation \"{}\"", name))?;
                tracing::debug!("Created organisation \"{}\" with ID {}", name, id);
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake::{Call, FakeGrafana};
    use crate::domain::error::ProvisionError;

    #[tokio::test]
    async fn test_existing_organisation_is_not_created() {
        let fake = Arc::new(FakeGrafana::default().with_organisation("Acme", 4));
        let service = OrganisationService::new(fake.clone());

        assert_eq!(service.resolve("Acme").await.unwrap(), 4);
        assert_eq!(fake.calls(), vec![Call::FindOrganisation("Acme".to_string())]);
    }

    #[tokio::test]
    async fn test_absent_organisation_is_created_once() {
        let fake = Arc::new(FakeGrafana::default().with_next_organisation_id(9));
        let service = OrganisationService::new(fake.clone());

        assert_eq!(service.resolve("Globex").await.unwrap(), 9);
        assert_eq!(
            fake.calls(),
            vec![
                Call::FindOrganisation("Globex".to_string()),
                Call::CreateOrganisation("Globex".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_failure_is_fatal() {
        let fake = Arc::new(FakeGrafana::default().failing_organisation_create("500 Internal Server Error"));
        let service = OrganisationService::new(fake);

        let err = service.resolve("Initech").await.unwrap_err();

        assert!(err.to_string().contains("Initech"));
        assert!(matches!(
            err.downcast_ref::<ProvisionError>(),
            Some(ProvisionError::Status(status)) if status == "500 Internal Server Error"
        ));
    }
}
