//! Typed reads over the conductor gateway.

use anyhow::Result;
use holo_common::{ConductorRequest, ObservedInstance, ObservedModule};
use serde::de::DeserializeOwned;

use crate::application::ports::ConductorGateway;
use crate::domain::RemoteError;

/// Call `request` and decode its result as `T`.
///
/// # Errors
///
/// Returns the gateway error unchanged, or `RemoteError::Decode` when the
/// result does not have the expected shape.
pub async fn call_as<T: DeserializeOwned>(
    gateway: &impl ConductorGateway,
    request: &ConductorRequest,
) -> Result<T> {
    let value = gateway.call(request).await?;
    serde_json::from_value(value).map_err(|e| {
        RemoteError::Decode {
            method: request.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// DNAs currently installed in the conductor.
///
/// # Errors
///
/// Returns an error if the query fails or cannot be decoded.
pub async fn installed_dnas(gateway: &impl ConductorGateway) -> Result<Vec<ObservedModule>> {
    call_as(gateway, &ConductorRequest::ListDnas).await
}

/// Instances currently configured in the conductor.
///
/// # Errors
///
/// Returns an error if the query fails or cannot be decoded.
pub async fn instances(gateway: &impl ConductorGateway) -> Result<Vec<ObservedInstance>> {
    call_as(gateway, &ConductorRequest::ListInstances).await
}
