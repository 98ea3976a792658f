// In-memory recording implementation of the repository traits for service tests
use crate::application::grafana_repository::{
    DashboardRepository, DatasourceRepository, OrganisationRepository, PublishStatus,
};
use crate::domain::datasource::Datasource;
use crate::domain::error::ProvisionError;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindOrganisation(String),
    CreateOrganisation(String),
    FindDatasource {
        api_key: String,
        name: String,
    },
    CreateDatasource {
        api_key: String,
        datasource: Datasource,
    },
    UpdateDatasource {
        api_key: String,
        id: i64,
        datasource: Datasource,
    },
    PublishDashboard {
        api_key: String,
        body: String,
    },
}

#[derive(Default)]
pub struct FakeGrafana {
    organisations: HashMap<String, i64>,
    next_organisation_id: i64,
    organisation_create_error: Option<String>,
    datasources: HashMap<String, i64>,
    datasource_write_error: Option<String>,
    publish_responses: Mutex<VecDeque<PublishStatus>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGrafana {
    pub fn with_organisation(mut self, name: &str, id: i64) -> Self {
        self.organisations.insert(name.to_string(), id);
        self
    }

    pub fn with_next_organisation_id(mut self, id: i64) -> Self {
        self.next_organisation_id = id;
        self
    }

    pub fn failing_organisation_create(mut self, status: &str) -> Self {
        self.organisation_create_error = Some(status.to_string());
        self
    }

    pub fn with_datasource(mut self, name: &str, id: i64) -> Self {
        self.datasources.insert(name.to_string(), id);
        self
    }

    pub fn failing_datasource_writes(mut self, status: &str) -> Self {
        self.datasource_write_error = Some(status.to_string());
        self
    }

    /// Queue publish outcomes; once drained every publish succeeds
    pub fn with_publish_responses(self, responses: Vec<PublishStatus>) -> Self {
        *self.publish_responses.lock().unwrap() = responses.into();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn published_bodies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PublishDashboard { body, .. } => Some(body),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn datasource_write_result(&self) -> anyhow::Result<()> {
        match &self.datasource_write_error {
            Some(status) => Err(ProvisionError::Status(status.clone()).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrganisationRepository for FakeGrafana {
    async fn find_organisation(&self, name: &str) -> anyhow::Result<i64> {
        self.record(Call::FindOrganisation(name.to_string()));
        self.organisations
            .get(name)
            .copied()
            .ok_or_else(|| ProvisionError::Status("404 Not Found".to_string()).into())
    }

    async fn create_organisation(&self, name: &str) -> anyhow::Result<i64> {
        self.record(Call::CreateOrganisation(name.to_string()));
        match &self.organisation_create_error {
            Some(status) => Err(ProvisionError::Status(status.clone()).into()),
            None => Ok(self.next_organisation_id),
        }
    }
}

#[async_trait]
impl DatasourceRepository for FakeGrafana {
    async fn find_datasource(&self, api_key: &str, name: &str) -> anyhow::Result<Option<i64>> {
        self.record(Call::FindDatasource {
            api_key: api_key.to_string(),
            name: name.to_string(),
        });
        Ok(self.datasources.get(name).copied())
    }

    async fn create_datasource(&self, api_key: &str, datasource: &Datasource) -> anyhow::Result<()> {
        self.record(Call::CreateDatasource {
            api_key: api_key.to_string(),
            datasource: datasource.clone(),
        });
        self.datasource_write_result()
    }

    async fn update_datasource(
        &self,
        api_key: &str,
        id: i64,
        datasource: &Datasource,
    ) -> anyhow::Result<()> {
        self.record(Call::UpdateDatasource {
            api_key: api_key.to_string(),
            id,
            datasource: datasource.clone(),
        });
        self.datasource_write_result()
    }
}

#[async_trait]
impl DashboardRepository for FakeGrafana {
    async fn publish_dashboard(&self, api_key: &str, body: &str) -> anyhow::Result<PublishStatus> {
        self.record(Call::PublishDashboard {
            api_key: api_key.to_string(),
            body: body.to_string(),
        });
        Ok(self
            .publish_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PublishStatus::Published))
    }
}
