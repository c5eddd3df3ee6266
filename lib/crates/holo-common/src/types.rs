use std::fmt;

use serde::{Deserialize, Serialize};

/// Content hash identifying a DNA or a hApp bundle.
///
/// Opaque to the CLI: compared by exact string equality, never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContentHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A DNA referenced by a hApp entry in the hApp store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub hash: ContentHash,
    /// Download URL of the DNA artifact. Only read during install.
    pub location: String,
}

/// hApp store entry as returned inside the `get_app` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    pub title: String,
    #[serde(default)]
    pub dnas: Vec<ModuleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
}

/// Payload of a successful `happs/get_app` zome call.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAppResponse {
    #[serde(rename = "appEntry")]
    pub app_entry: AppEntry,
}

/// Record returned by `admin/dna/list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObservedModule {
    pub hash: ContentHash,
}

/// Record returned by `admin/instance/list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObservedInstance {
    pub id: String,
}

/// Admin mutation acknowledgement (`{"success": bool}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}

/// Zome functions answer with a Rust-style `{"Ok": ..}` / `{"Err": ..}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub enum ZomeResult<T> {
    Ok(T),
    Err(serde_json::Value),
}

impl<T> ZomeResult<T> {
    /// Convert the envelope into a `Result`, keeping the raw error payload.
    pub fn into_result(self) -> Result<T, serde_json::Value> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(err) => Err(err),
        }
    }
}
