// Repository traits for the platform's administrative API
use crate::domain::datasource::Datasource;
use async_trait::async_trait;

/// Outcome of a dashboard publish attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PublishStatus {
    Published,
    NotFound { body: String },
    /// Any other non-success status, with the status line and response body
    Rejected { status: String, body: String },
}

/// Organisation endpoints, authenticated with the admin credentials
#[async_trait]
pub trait OrganisationRepository: Send + Sync {
    /// Look up an organisation by name and return its id
    async fn find_organisation(&self, name: &str) -> anyhow::Result<i64>;

    /// Create an organisation and return the id the platform assigned
    async fn create_organisation(&self, name: &str) -> anyhow::Result<i64>;
}

/// Datasource endpoints, authenticated with an organisation's API key
#[async_trait]
pub trait DatasourceRepository: Send + Sync {
    /// Id of the named datasource, or `None` when the lookup is not successful
    async fn find_datasource(&self, api_key: &str, name: &str) -> anyhow::Result<Option<i64>>;

    async fn create_datasource(&self, api_key: &str, datasource: &Datasource) -> anyhow::Result<()>;

    async fn update_datasource(
        &self,
        api_key: &str,
        id: i64,
        datasource: &Datasource,
    ) -> anyhow::Result<()>;
}

/// Dashboard endpoint, authenticated with an organisation's API key
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Post a pre-built `{"overwrite":..,"dashboard":..}` body
    async fn publish_dashboard(&self, api_key: &str, body: &str) -> anyhow::Result<PublishStatus>;
}
