//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

// ── Conductor errors ──────────────────────────────────────────────────────────

/// Errors raised by a conductor call. Surfaced to the operator verbatim.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("cannot reach conductor for {method}: {message}")]
    Transport { method: String, message: String },

    #[error("conductor returned HTTP {status} for {method}: {body}")]
    Status {
        method: String,
        status: u16,
        body: String,
    },

    #[error("conductor rejected {method} (code {code}): {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    #[error("zome call {call} failed: {payload}")]
    Zome { call: String, payload: Value },

    #[error("unexpected response to {method}: {message}")]
    Decode { method: String, message: String },
}

// ── Artifact errors ───────────────────────────────────────────────────────────

/// Errors raised while downloading a DNA artifact.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot download {url}: {message}")]
    Transport { url: String, message: String },

    #[error("download of {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Activation errors ─────────────────────────────────────────────────────────

/// An activation step answered without `success: true`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivationError {
    #[error("Failed to add instance {instance_id} to interface {interface_id}")]
    InterfaceBind {
        instance_id: String,
        interface_id: String,
    },

    #[error("Failed to start instance {instance_id}")]
    Start { instance_id: String },
}

// ── Workflow errors ───────────────────────────────────────────────────────────

/// A lifecycle run stopped at its first failure.
///
/// `completed` holds the responses recorded before the failing step, in
/// bundle order. Nothing in it is rolled back.
#[derive(Debug, Error)]
#[error("{source:#}")]
pub struct WorkflowAborted {
    pub completed: Vec<Value>,
    #[source]
    pub source: anyhow::Error,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid conductor URL '{0}': expected http:// or https://")]
    InvalidConductorUrl(String),

    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,
}
