//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the conductor JSON-RPC
//! client, artifact downloads, and configuration file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod conductor;
pub mod config;
pub mod fetcher;
