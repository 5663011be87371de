// API client module: a small blocking HTTP client that talks to the
// kaptaind broker. Each operation performs exactly one round trip and
// decodes the broker's reply envelope; there are no retries and no
// caching, and the default transport timeout applies.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Cluster, Envelope, NewTaskRequest, StatusEnvelope, Task};

/// Broker client holding a reqwest blocking client and the base URL of
/// the broker API. The endpoint is injected once at construction and
/// never mutated afterwards.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create an ApiClient for the given broker base URL. A trailing
    /// slash on the URL is tolerated and stripped.
    pub fn new(broker_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: broker_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and decode the reply envelope.
    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self.client.get(&url).send()?;
        let body = res.text()?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// List all clusters known to the broker. An empty broker may
    /// legitimately return zero clusters.
    pub fn list_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        let envelope: Envelope<Vec<Cluster>> = self.fetch("/clusters")?;
        envelope.take_list()
    }

    /// Fetch a single cluster by id. The id is passed through untouched;
    /// the broker is authoritative on "not found" and reports it through
    /// the envelope's error message.
    pub fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        let envelope: Envelope<Cluster> = self.fetch(&format!("/clusters/{id}"))?;
        envelope.take_record()
    }

    /// List all migration tasks.
    pub fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let envelope: Envelope<Vec<Task>> = self.fetch("/tasks")?;
        envelope.take_list()
    }

    /// Fetch the current state of a single task.
    pub fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let envelope: Envelope<Task> = self.fetch(&format!("/tasks/{id}/state"))?;
        envelope.take_record()
    }

    /// Start a new migration task from `source` to `target`. The caller
    /// validates that both ids are non-empty before invoking this.
    pub fn create_task(&self, source: &str, target: &str) -> Result<(), ApiError> {
        let req = NewTaskRequest {
            source_cluster_id: source.to_string(),
            target_cluster_id: target.to_string(),
        };
        let url = format!("{}/tasks", self.base_url);
        let res = self.client.post(&url).json(&req).send()?;
        let body = res.text()?;
        let envelope: StatusEnvelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        envelope.into_result()
    }

    /// Delete a task, fire-and-forget: any response that arrives over a
    /// working transport counts as success and the body is never read.
    /// Use `delete_task_strict` to have the broker's reply inspected.
    pub fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/tasks/{id}", self.base_url);
        self.client.delete(&url).send()?;
        Ok(())
    }

    /// Delete a task and decode the reply envelope, surfacing a broker
    /// error message if one is present.
    pub fn delete_task_strict(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/tasks/{id}", self.base_url);
        let res = self.client.delete(&url).send()?;
        let body = res.text()?;
        let envelope: StatusEnvelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let api = ApiClient::new("http://broker.local/").unwrap();
        assert_eq!(api.base_url(), "http://broker.local");
    }

    #[test]
    fn base_url_is_kept_as_given_otherwise() {
        let api = ApiClient::new("http://broker.local:8080").unwrap();
        assert_eq!(api.base_url(), "http://broker.local:8080");
    }
}
