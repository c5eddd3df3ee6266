//! Application service — install the DNAs of a hApp bundle.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;

use anyhow::Result;
use holo_common::{ConductorRequest, ContentHash, ModuleRef};
use serde_json::Value;

use crate::application::ports::{ArtifactFetcher, ArtifactNaming, ConductorGateway, ProgressReporter};
use crate::application::services::bundle::resolve_bundle;
use crate::application::services::query::installed_dnas;
use crate::domain::reconcile::{by_hash, installed_hashes};
use crate::domain::{WorkflowAborted, artifact_filename, partition};

/// Parameters of an install run.
pub struct InstallOptions<'a> {
    /// hApp store instance id.
    pub registry: &'a str,
    /// Directory DNA artifacts are downloaded to.
    pub download_dir: &'a Path,
}

/// Install every DNA of `bundle_hash` that the conductor does not already have.
///
/// DNAs whose hash is already installed are skipped and reported. The
/// returned list holds one install response per DNA, in bundle order.
///
/// # Errors
///
/// Fails before any change if the bundle or the installed DNA list cannot be
/// read. A failure mid-run is returned as [`WorkflowAborted`] carrying the
/// responses of the DNAs installed so far.
pub async fn install_bundle(
    gateway: &impl ConductorGateway,
    fetcher: &impl ArtifactFetcher,
    reporter: &impl ProgressReporter,
    bundle_hash: &ContentHash,
    opts: &InstallOptions<'_>,
) -> Result<Vec<Value>> {
    let bundle = resolve_bundle(gateway, opts.registry, bundle_hash).await?;
    let installed = installed_hashes(&installed_dnas(gateway).await?);

    let split = partition(&bundle.modules, &installed, by_hash);
    for dna in &split.satisfied {
        reporter.info(&format!("Skipping {} because DNA already installed", dna.hash));
    }

    Ok(install_modules(gateway, fetcher, reporter, &split.pending, opts.download_dir).await?)
}

/// Download and install each DNA of `pending`, one at a time.
///
/// # Errors
///
/// Stops at the first fetch or install failure. DNAs installed earlier stay
/// installed; their responses are in `WorkflowAborted::completed`.
pub async fn install_modules(
    gateway: &impl ConductorGateway,
    fetcher: &impl ArtifactFetcher,
    reporter: &impl ProgressReporter,
    pending: &[&ModuleRef],
    download_dir: &Path,
) -> Result<Vec<Value>, WorkflowAborted> {
    let mut installed = Vec::with_capacity(pending.len());
    for dna in pending {
        match install_one(gateway, fetcher, reporter, dna, download_dir).await {
            Ok(response) => installed.push(response),
            Err(source) => {
                return Err(WorkflowAborted {
                    completed: installed,
                    source,
                });
            }
        }
    }
    Ok(installed)
}

async fn install_one(
    gateway: &impl ConductorGateway,
    fetcher: &impl ArtifactFetcher,
    reporter: &impl ProgressReporter,
    dna: &ModuleRef,
    download_dir: &Path,
) -> Result<Value> {
    reporter.step(&format!("downloading DNA {}...", dna.hash));
    let naming = ArtifactNaming {
        directory: download_dir.to_path_buf(),
        filename: artifact_filename(&dna.hash),
    };
    let path = fetcher.fetch(&dna.location, &naming).await?;
    tracing::info!(path = %path.display(), "DNA download location");

    // The conductor checks the file against `expected_hash`.
    let request = ConductorRequest::InstallDna {
        id: dna.hash.clone(),
        path: path.to_string_lossy().into_owned(),
        expected_hash: dna.hash.clone(),
    };
    let response = gateway.call(&request).await?;
    tracing::info!(%response, "install_from_file");

    reporter.success(&format!("installed DNA {}", dna.hash));
    Ok(response)
}
