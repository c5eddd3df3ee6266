//! JSON output helpers.
//!
//! `--json` prints the bare conductor response on stdout. Failures are
//! printed as an error object instead.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::HoloConfig;

/// Machine-readable renderer used with `--json`.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print a raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_value(&self, value: &Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print the per-DNA responses of a workflow as an array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_results(&self, results: &[Value]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(results).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print the effective configuration together with its source path.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &HoloConfig, path: &std::path::Path) -> Result<()> {
        let obj = serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&obj).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print `{"path": ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_path(&self, path: &std::path::Path) -> Result<()> {
        let obj = serde_json::json!({ "path": path.display().to_string() });
        println!("{}", serde_json::to_string(&obj).context("JSON serialization failed")?);
        Ok(())
    }

    /// Print `{"version": ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        let obj = serde_json::json!({ "version": version });
        println!("{}", serde_json::to_string(&obj).context("JSON serialization failed")?);
        Ok(())
    }
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Same as [`format_error`], plus the responses recorded before a workflow
/// stopped.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_aborted(message: &str, completed: &[Value]) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": "WORKFLOW_ABORTED",
        "completed": completed,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
