//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `holo_common` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use holo_common::ConductorRequest;
use serde_json::Value;

use crate::domain::HoloConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Where a downloaded artifact is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    /// Target directory. Created if missing.
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub filename: String,
}

impl ArtifactNaming {
    /// Full path of the artifact.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

// ── Conductor Port ────────────────────────────────────────────────────────────

/// Remote procedure gateway to the conductor.
///
/// One handle is opened ahead of time and shared by reference. Implementations
/// own any timeout policy; callers never retry.
#[allow(async_fn_in_trait)]
pub trait ConductorGateway {
    /// Send one request and return the decoded `result` payload.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` on transport failure or when the conductor
    /// rejects the request.
    async fn call(&self, request: &ConductorRequest) -> Result<Value>;
}

// ── Artifact Port ─────────────────────────────────────────────────────────────

/// Downloads DNA artifacts to local storage.
#[allow(async_fn_in_trait)]
pub trait ArtifactFetcher {
    /// Fetch `url` into the location described by `naming` and return the
    /// local path.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` when the URL is unreachable or the file cannot
    /// be written.
    async fn fetch(&self, url: &str, naming: &ArtifactNaming) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a neutral notice, e.g. an item skipped because it needs no work.
    fn info(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<HoloConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
