//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod activation;
pub mod bundle;
pub mod config;
pub mod error;
pub mod reconcile;

pub use activation::{ActivationStage, expect_ack};
pub use bundle::{BundleDescriptor, artifact_filename, instance_id};
pub use config::{ConductorConfig, HoloConfig, expand_home, validate_conductor};
pub use error::{ActivationError, ConfigError, FetchError, RemoteError, WorkflowAborted};
pub use reconcile::{Partition, partition};
