//! Desired-vs-observed reconciliation.
//!
//! Pure functions only. Inputs are borrowed and never modified.

use std::collections::HashSet;
use std::hash::Hash;

use holo_common::{ContentHash, ModuleRef, ObservedInstance, ObservedModule};

use crate::domain::bundle::instance_id;

/// Desired modules split by whether their key is already observed.
///
/// Both halves keep the relative order of the desired list.
#[derive(Debug, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Key present in the observed set.
    pub satisfied: Vec<&'a ModuleRef>,
    /// Key absent from the observed set.
    pub pending: Vec<&'a ModuleRef>,
}

/// Split `desired` by membership of `key_fn(module)` in `observed`.
pub fn partition<'a, K, F>(desired: &'a [ModuleRef], observed: &HashSet<K>, key_fn: F) -> Partition<'a>
where
    K: Eq + Hash,
    F: Fn(&ModuleRef) -> K,
{
    let (satisfied, pending): (Vec<&ModuleRef>, Vec<&ModuleRef>) = desired
        .iter()
        .partition(|module| observed.contains(&key_fn(*module)));
    Partition { satisfied, pending }
}

/// Hash keys of the DNAs the conductor reports as installed.
#[must_use]
pub fn installed_hashes(observed: &[ObservedModule]) -> HashSet<ContentHash> {
    observed.iter().map(|dna| dna.hash.clone()).collect()
}

/// Ids of the instances the conductor reports.
#[must_use]
pub fn instance_ids(observed: &[ObservedInstance]) -> HashSet<String> {
    observed.iter().map(|instance| instance.id.clone()).collect()
}

/// Key function for install and uninstall.
#[must_use]
pub fn by_hash(module: &ModuleRef) -> ContentHash {
    module.hash.clone()
}

/// Key function for activation.
#[must_use]
pub fn by_instance_id(module: &ModuleRef) -> String {
    instance_id(&module.hash)
}
