//! Command implementations

pub mod admin;
pub mod call;
pub mod config;
pub mod happ;
pub mod host;
pub mod provider;
pub mod version;
