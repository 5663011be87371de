// Wire types for the broker API. Field names follow the broker's JSON
// schema, so every struct carries explicit serde renames. The same
// structs drive table output through the `Tabled` derive: header order
// is declaration order.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::ApiError;

/// Snapshot of one Kubernetes cluster known to the broker.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Tabled)]
pub struct Cluster {
    pub id: String,
    #[serde(rename = "kubeletVersion")]
    pub kubelet_version: String,
    #[serde(rename = "configMapsCount")]
    pub config_maps: u64,
    #[serde(rename = "depsCount")]
    pub deployments: u64,
    #[serde(rename = "podCount")]
    pub pods: u64,
    #[serde(rename = "rcCount")]
    pub replication_controllers: u64,
    #[serde(rename = "rsCount")]
    pub replica_sets: u64,
    #[serde(rename = "svcCount")]
    pub services: u64,
}

/// A migration job tracked by the broker. `status` is a broker-defined
/// string and is not validated client-side.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Tabled)]
pub struct Task {
    pub id: String,
    pub status: String,
    #[serde(rename = "sourceClusterId")]
    pub source_cluster: String,
    #[serde(rename = "targetClusterId")]
    pub target_cluster: String,
}

/// POST body for `run task`.
#[derive(Debug, Serialize)]
pub struct NewTaskRequest {
    #[serde(rename = "sourceClusterId")]
    pub source_cluster_id: String,
    #[serde(rename = "targetClusterId")]
    pub target_cluster_id: String,
}

/// Generic reply wrapper for read operations. The broker sends `status`
/// as a number here but as a string on create, so it stays a
/// `serde_json::Value`; nothing in the client depends on it.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: serde_json::Value,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
    pub data: Option<T>,
}

/// Reply wrapper for create, which carries no payload.
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub status: serde_json::Value,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
}

impl<T> Envelope<T> {
    fn check_error(self) -> Result<Option<T>, ApiError> {
        if !self.error_message.is_empty() {
            // A broker error invalidates the payload, whatever it holds.
            return Err(ApiError::Application(self.error_message));
        }
        Ok(self.data)
    }

    /// Consume a single-record envelope. An empty error message with no
    /// payload is a shape mismatch, not an empty result.
    pub fn take_record(self) -> Result<T, ApiError> {
        self.check_error()?
            .ok_or_else(|| ApiError::Parse("response envelope is missing the data field".into()))
    }
}

impl<T> Envelope<Vec<T>> {
    /// Consume a list envelope. A missing `data` field decodes as the
    /// empty sequence.
    pub fn take_list(self) -> Result<Vec<T>, ApiError> {
        Ok(self.check_error()?.unwrap_or_default())
    }
}

impl StatusEnvelope {
    pub fn into_result(self) -> Result<(), ApiError> {
        if !self.error_message.is_empty() {
            return Err(ApiError::Application(self.error_message));
        }
        Ok(())
    }
}
