// Grafana HTTP API implementation of the repository traits
use crate::application::grafana_repository::{
    DashboardRepository, DatasourceRepository, OrganisationRepository, PublishStatus,
};
use crate::domain::datasource::Datasource;
use crate::domain::error::ProvisionError;
use crate::infrastructure::config::ConnectionSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Organisation calls go to `admin_base`, which carries the admin
/// credentials as userinfo. Datasource and dashboard calls go to `api_base`
/// with the organisation's bearer key.
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    client: reqwest::Client,
    admin_base: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct OrganisationId {
    // The create endpoint answers with `orgId`, the lookup with `id`
    #[serde(alias = "orgId")]
    id: i64,
}

#[derive(Debug, Deserialize)]
struct DatasourceId {
    id: i64,
}

#[derive(Debug, Serialize)]
struct NewOrganisation<'a> {
    name: &'a str,
}

impl GrafanaClient {
    pub fn new(settings: &ConnectionSettings) -> Result<Self, ProvisionError> {
        Self::with_client(settings, reqwest::Client::new())
    }

    pub fn with_client(
        settings: &ConnectionSettings,
        client: reqwest::Client,
    ) -> Result<Self, ProvisionError> {
        let admin = settings.admin_endpoint()?;
        let api = settings.api_endpoint()?;
        Ok(Self {
            client,
            admin_base: admin.as_str().trim_end_matches('/').to_string(),
            api_base: api.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn admin_url(&self, path: &str) -> String {
        format!("{}/{}", self.admin_base, path)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Fail on a non-success status, otherwise decode the JSON body
    async fn parse_success<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::Status(status.to_string()).into());
        }
        response
            .json::<T>()
            .await
            .context("Failed to parse Grafana response")
    }

    fn ensure_success(response: &Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::Status(status.to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl OrganisationRepository for GrafanaClient {
    async fn find_organisation(&self, name: &str) -> Result<i64> {
        let url = self.admin_url(&format!("api/orgs/name/{}", urlencoding::encode(name)));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send organisation lookup to Grafana")?;

        let org: OrganisationId = Self::parse_success(response).await?;
        Ok(org.id)
    }

    async fn create_organisation(&self, name: &str) -> Result<i64> {
        let response = self
            .client
            .post(self.admin_url("api/orgs"))
            .json(&NewOrganisation { name })
            .send()
            .await
            .context("Failed to send organisation creation to Grafana")?;

        let org: OrganisationId = Self::parse_success(response).await?;
        Ok(org.id)
    }
}

#[async_trait]
impl DatasourceRepository for GrafanaClient {
    async fn find_datasource(&self, api_key: &str, name: &str) -> Result<Option<i64>> {
        let url = self.api_url(&format!("api/datasources/name/{}", urlencoding::encode(name)));
        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .send()
            .await
            .context("Failed to send datasource lookup to Grafana")?;

        tracing::debug!("Does datasource \"{}\" exist? {}", name, response.status());
        if !response.status().is_success() {
            return Ok(None);
        }

        let datasource: DatasourceId = response
            .json()
            .await
            .context("Failed to parse datasource lookup response")?;
        Ok(Some(datasource.id))
    }

    async fn create_datasource(&self, api_key: &str, datasource: &Datasource) -> Result<()> {
        let response = self
            .client
            .post(self.api_url("api/datasources/"))
            .bearer_auth(api_key)
            .json(datasource)
            .send()
            .await
            .context("Failed to send datasource creation to Grafana")?;

        Self::ensure_success(&response)
    }

    async fn update_datasource(&self, api_key: &str, id: i64, datasource: &Datasource) -> Result<()> {
        let response = self
            .client
            .put(self.api_url(&format!("api/datasources/{}", id)))
            .bearer_auth(api_key)
            .json(datasource)
            .send()
            .await
            .context("Failed to send datasource update to Grafana")?;

        Self::ensure_success(&response)
    }
}

#[async_trait]
impl DashboardRepository for GrafanaClient {
    async fn publish_dashboard(&self, api_key: &str, body: &str) -> Result<PublishStatus> {
        let response = self
            .client
            .post(self.api_url("api/dashboards/db/"))
            .bearer_auth(api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .context("Failed to send dashboard to Grafana")?;

        let status = response.status();
        if status.is_success() {
            return Ok(PublishStatus::Published);
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            return Ok(PublishStatus::NotFound { body });
        }
        Ok(PublishStatus::Rejected {
            status: status.to_string(),
            body,
        })
    }
}
