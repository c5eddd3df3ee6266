//! hApp bundle descriptor and module identity rules.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::HashSet;

use holo_common::{AppEntry, ContentHash, ModuleRef};

/// Prefix of every instance created by `holo admin init`.
pub const INSTANCE_ID_PREFIX: &str = "servicelogger-";

/// Suffix of a downloaded DNA artifact.
pub const ARTIFACT_SUFFIX: &str = ".dna.json";

/// A hApp as resolved from the hApp store for one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDescriptor {
    pub hash: ContentHash,
    pub title: String,
    pub modules: Vec<ModuleRef>,
}

impl BundleDescriptor {
    /// Build a descriptor from a hApp store entry.
    ///
    /// A DNA listed twice is kept at its first position only, so a run
    /// never acts on the same hash twice.
    #[must_use]
    pub fn from_entry(hash: ContentHash, entry: AppEntry) -> Self {
        let mut seen = HashSet::new();
        let modules = entry
            .dnas
            .into_iter()
            .filter(|dna| seen.insert(dna.hash.clone()))
            .collect();
        Self {
            hash,
            title: entry.title,
            modules,
        }
    }
}

/// Instance id for a DNA. Never supplied by the operator.
#[must_use]
pub fn instance_id(hash: &ContentHash) -> String {
    format!("{INSTANCE_ID_PREFIX}{hash}")
}

/// File name a DNA artifact is downloaded to.
#[must_use]
pub fn artifact_filename(hash: &ContentHash) -> String {
    format!("{hash}{ARTIFACT_SUFFIX}")
}
