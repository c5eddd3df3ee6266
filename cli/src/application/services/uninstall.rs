//! Application service — uninstall the DNAs of a hApp bundle.

use anyhow::Result;
use holo_common::{ConductorRequest, ContentHash, ModuleRef};
use serde_json::Value;

use crate::application::ports::{ConductorGateway, ProgressReporter};
use crate::application::services::bundle::resolve_bundle;
use crate::application::services::query::installed_dnas;
use crate::domain::reconcile::{by_hash, installed_hashes};
use crate::domain::{WorkflowAborted, partition};

/// Uninstall every DNA of `bundle_hash` that the conductor currently has.
///
/// DNAs that are not installed are skipped and reported. The returned list
/// holds one uninstall response per removed DNA, in bundle order.
///
/// # Errors
///
/// Fails before any change if the bundle or the installed DNA list cannot be
/// read. A failure mid-run is returned as [`WorkflowAborted`].
pub async fn uninstall_bundle(
    gateway: &impl ConductorGateway,
    reporter: &impl ProgressReporter,
    registry: &str,
    bundle_hash: &ContentHash,
) -> Result<Vec<Value>> {
    let bundle = resolve_bundle(gateway, registry, bundle_hash).await?;
    let installed = installed_hashes(&installed_dnas(gateway).await?);

    // Only DNAs the conductor has are acted on here.
    let split = partition(&bundle.modules, &installed, by_hash);
    for dna in &split.pending {
        reporter.info(&format!("Skipping {} because DNA is not installed", dna.hash));
    }

    Ok(uninstall_modules(gateway, reporter, &split.satisfied).await?)
}

/// Uninstall each DNA of `present`, one at a time.
///
/// # Errors
///
/// Stops at the first rejected request; DNAs removed earlier stay removed.
pub async fn uninstall_modules(
    gateway: &impl ConductorGateway,
    reporter: &impl ProgressReporter,
    present: &[&ModuleRef],
) -> Result<Vec<Value>, WorkflowAborted> {
    let mut uninstalled = Vec::with_capacity(present.len());
    for dna in present {
        reporter.step(&format!("uninstalling DNA {}...", dna.hash));
        let request = ConductorRequest::UninstallDna {
            id: dna.hash.clone(),
        };
        match gateway.call(&request).await {
            Ok(response) => {
                tracing::info!(%response, "uninstall");
                reporter.success(&format!("uninstalled DNA {}", dna.hash));
                uninstalled.push(response);
            }
            Err(source) => {
                return Err(WorkflowAborted {
                    completed: uninstalled,
                    source,
                });
            }
        }
    }
    Ok(uninstalled)
}
