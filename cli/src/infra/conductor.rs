//! Infrastructure implementation of the `ConductorGateway` port.
//!
//! Speaks JSON-RPC 2.0 over HTTP to the conductor's admin interface. One
//! client is built in `main` and shared by reference for the whole process.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use holo_common::ConductorRequest;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::ConductorGateway;
use crate::domain::{ConductorConfig, RemoteError, validate_conductor};

/// HTTP JSON-RPC client for the conductor.
pub struct HttpConductorClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl HttpConductorClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ConductorConfig) -> Result<Self> {
        validate_conductor(config)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.url.trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this client talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConductorGateway for HttpConductorClient {
    async fn call(&self, request: &ConductorRequest) -> Result<Value> {
        let rpc = request.rpc();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": rpc.method,
            "params": rpc.params,
        });
        tracing::debug!(id, method = %rpc.method, "conductor request");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                method: rpc.method.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                method: rpc.method,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let decoded: RpcResponse = response.json().await.map_err(|e| RemoteError::Decode {
            method: rpc.method.clone(),
            message: e.to_string(),
        })?;

        if let Some(error) = decoded.error {
            return Err(RemoteError::Rpc {
                method: rpc.method,
                code: error.code,
                message: error.message,
            }
            .into());
        }

        let result = decoded.result.unwrap_or(Value::Null);
        tracing::trace!(id, %result, "conductor response");
        Ok(unwrap_zome_result(request, result))
    }
}

/// Zome call results arrive JSON-encoded inside a string.
fn unwrap_zome_result(request: &ConductorRequest, result: Value) -> Value {
    match (request, &result) {
        (ConductorRequest::ZomeCall { .. }, Value::String(encoded)) => {
            serde_json::from_str(encoded).unwrap_or(result)
        }
        _ => result,
    }
}
