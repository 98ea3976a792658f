// Datasource service - Create or update a datasource inside an organisation
use crate::application::grafana_repository::DatasourceRepository;
use crate::domain::datasource::Datasource;
use crate::domain::organisation::ResolvedOrganisation;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasourceAction {
    Created,
    Updated,
}

#[derive(Clone)]
pub struct DatasourceService {
    repository: Arc<dyn DatasourceRepository>,
}

impl DatasourceService {
    pub fn new(repository: Arc<dyn DatasourceRepository>) -> Self {
        Self { repository }
    }

    pub async fn reconcile(
        &self,
        org: &ResolvedOrganisation<'_>,
        name: &str,
        definition: &Datasource,
    ) -> anyhow::Result<DatasourceAction> {
        let api_key = org.api_key()?;

        match self.repository.find_datasource(api_key, name).await? {
            Some(id) => {
                tracing::debug!("Datasource \"{}\" exists in org {} with ID {}", name, org.id, id);
                let datasource = definition.prepared(name, org.id, Some(id));
                self.repository
                    .update_datasource(api_key, id, &datasource)
                    .await?;
                Ok(DatasourceAction::Updated)
            }
            None => {
                tracing::debug!("Datasource \"{}\" doesn't exist in org {}", name, org.id);
                let datasource = definition.prepared(name, org.id, None);
                if let Ok(json) = serde_json::to_string(&datasource) {
                    tracing::debug!("Turned into JSON: {}", json);
                }
                self.repository.create_datasource(api_key, &datasource).await?;
                tracing::debug!("Posted \"{}\"", name);
                Ok(DatasourceAction::Created)
            }
        }
    }
}
