//! Application service — resolve a hApp bundle from the hApp store.

use anyhow::Result;
use holo_common::{ConductorRequest, ContentHash, GetAppResponse, ZomeResult};
use serde_json::json;

use crate::application::ports::ConductorGateway;
use crate::application::services::query::call_as;
use crate::domain::{BundleDescriptor, RemoteError};

/// Fetch the descriptor of `bundle_hash` from the hApp store instance
/// `registry`.
///
/// Issues exactly one zome call and performs no local validation of the hash.
///
/// # Errors
///
/// Returns the gateway error unchanged, or `RemoteError::Zome` when the hApp
/// store answers with an `Err` envelope (e.g. unknown hash).
pub async fn resolve_bundle(
    gateway: &impl ConductorGateway,
    registry: &str,
    bundle_hash: &ContentHash,
) -> Result<BundleDescriptor> {
    let request = ConductorRequest::zome(
        registry,
        "happs",
        "get_app",
        json!({ "app_hash": bundle_hash }),
    );
    let response: ZomeResult<GetAppResponse> = call_as(gateway, &request).await?;
    let app = response.into_result().map_err(|payload| RemoteError::Zome {
        call: request.to_string(),
        payload,
    })?;

    let bundle = BundleDescriptor::from_entry(bundle_hash.clone(), app.app_entry);
    tracing::info!(
        hash = %bundle.hash,
        title = %bundle.title,
        dnas = bundle.modules.len(),
        "resolved hApp bundle"
    );
    Ok(bundle)
}
