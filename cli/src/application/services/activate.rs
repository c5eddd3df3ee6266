//! Application service — activate (`init`) the DNAs of a hApp bundle.
//!
//! Each DNA not yet instantiated goes through three admin calls, strictly in
//! order: create the instance, bind it to the interface, start it. The first
//! failure ends the whole run. Instances left half-way are picked up only by
//! the instance listing of a later run.

use anyhow::Result;
use holo_common::{ConductorRequest, ContentHash, ModuleRef};
use serde_json::Value;

use crate::application::ports::{ConductorGateway, ProgressReporter};
use crate::application::services::bundle::resolve_bundle;
use crate::application::services::query::instances;
use crate::domain::reconcile::{by_instance_id, instance_ids};
use crate::domain::{
    ActivationError, ActivationStage, WorkflowAborted, expect_ack, instance_id, partition,
};

/// Parameters of an activation run.
pub struct ActivateOptions<'a> {
    /// hApp store instance id.
    pub registry: &'a str,
    /// Agent the new instances are bound to.
    pub host_agent: &'a str,
    /// Interface the new instances are exposed through.
    pub interface: &'a str,
}

/// Instantiate, bind and start every DNA of `bundle_hash` that has no
/// instance yet.
///
/// Returns the `admin/instance/add` responses, in bundle order.
///
/// # Errors
///
/// Fails before any change if the bundle or the instance list cannot be
/// read. A failure mid-run is returned as [`WorkflowAborted`].
pub async fn activate_bundle(
    gateway: &impl ConductorGateway,
    reporter: &impl ProgressReporter,
    bundle_hash: &ContentHash,
    opts: &ActivateOptions<'_>,
) -> Result<Vec<Value>> {
    let bundle = resolve_bundle(gateway, opts.registry, bundle_hash).await?;
    let existing = instance_ids(&instances(gateway).await?);

    let split = partition(&bundle.modules, &existing, by_instance_id);
    // No partial resume: an existing instance is not re-bound or re-started.
    for dna in &split.satisfied {
        reporter.info(&format!(
            "Skipping {} because instance already initiated",
            instance_id(&dna.hash)
        ));
    }

    Ok(activate_modules(gateway, reporter, &split.pending, opts).await?)
}

/// Run the activation sequence for each DNA of `pending`, one at a time.
///
/// # Errors
///
/// Stops the whole batch at the first failed step. The instance-creation
/// response of the failing DNA is kept in `WorkflowAborted::completed` when
/// that step had already succeeded.
pub async fn activate_modules(
    gateway: &impl ConductorGateway,
    reporter: &impl ProgressReporter,
    pending: &[&ModuleRef],
    opts: &ActivateOptions<'_>,
) -> Result<Vec<Value>, WorkflowAborted> {
    let mut initialized = Vec::with_capacity(pending.len());
    for dna in pending {
        let mut stage = ActivationStage::Absent;
        let outcome = run_steps(gateway, reporter, dna, opts, &mut initialized, &mut stage).await;
        if let Err(source) = outcome {
            if stage > ActivationStage::Absent {
                reporter.warn(&format!(
                    "instance {} left {stage}",
                    instance_id(&dna.hash)
                ));
            }
            return Err(WorkflowAborted {
                completed: initialized,
                source,
            });
        }
    }
    Ok(initialized)
}

async fn run_steps(
    gateway: &impl ConductorGateway,
    reporter: &impl ProgressReporter,
    dna: &ModuleRef,
    opts: &ActivateOptions<'_>,
    results: &mut Vec<Value>,
    stage: &mut ActivationStage,
) -> Result<()> {
    let id = instance_id(&dna.hash);

    reporter.step(&format!("adding instance {id}..."));
    let created = gateway
        .call(&ConductorRequest::AddInstance {
            id: id.clone(),
            agent_id: opts.host_agent.to_string(),
            dna_id: dna.hash.clone(),
        })
        .await?;
    tracing::info!(response = %created, "instance add");
    results.push(created);
    *stage = stage.next();

    tracing::info!(instance = %id, interface = %opts.interface, "add instance to interface");
    let bound = gateway
        .call(&ConductorRequest::AddInstanceToInterface {
            interface_id: opts.interface.to_string(),
            instance_id: id.clone(),
        })
        .await?;
    tracing::debug!(response = %bound, "interface add_instance");
    expect_ack(
        &bound,
        ActivationError::InterfaceBind {
            instance_id: id.clone(),
            interface_id: opts.interface.to_string(),
        },
    )?;
    *stage = stage.next();

    let started = gateway
        .call(&ConductorRequest::StartInstance { id: id.clone() })
        .await?;
    tracing::debug!(response = %started, "instance start");
    expect_ack(&started, ActivationError::Start { instance_id: id.clone() })?;
    *stage = stage.next();

    reporter.success(&format!("instance {id} running"));
    Ok(())
}
