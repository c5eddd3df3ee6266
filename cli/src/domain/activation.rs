//! Activation stages and acknowledgement checks.
//!
//! Pure functions only — no I/O, no async.

use std::fmt;

use holo_common::Ack;
use serde_json::Value;

use crate::domain::error::ActivationError;

/// How far a DNA got through activation. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActivationStage {
    Absent,
    Instantiated,
    InterfaceBound,
    Running,
}

impl ActivationStage {
    /// The stage reached once the step leaving `self` succeeds.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Absent => Self::Instantiated,
            Self::Instantiated => Self::InterfaceBound,
            Self::InterfaceBound | Self::Running => Self::Running,
        }
    }
}

impl fmt::Display for ActivationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Instantiated => "instantiated",
            Self::InterfaceBound => "interface-bound",
            Self::Running => "running",
        })
    }
}

/// Decode an admin response as an [`Ack`], failing with `on_failure` unless
/// it carries `success: true`.
///
/// A response that is not an object counts as a failure.
///
/// # Errors
///
/// Returns `on_failure` when the conductor did not acknowledge the step.
pub fn expect_ack(response: &Value, on_failure: ActivationError) -> Result<Ack, ActivationError> {
    match serde_json::from_value::<Ack>(response.clone()) {
        Ok(ack) if ack.success => Ok(ack),
        _ => Err(on_failure),
    }
}
