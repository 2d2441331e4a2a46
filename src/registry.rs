//! Step registry: in-memory mapping from owner type to named steps.
//!
//! Append-only after startup; a later registration for the same
//! `(type, name)` pair replaces the earlier one. Resolution walks an
//! object's declared type chain most-derived first, but the direct
//! listing (`destinations_for`) never aggregates ancestors.

use crate::step::NavigateStep;
use std::any::TypeId;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Mapping from owner type to a mapping from destination name to step.
#[derive(Default)]
pub struct StepRegistry {
    steps: HashMap<TypeId, HashMap<String, Arc<dyn NavigateStep>>>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a step for `(owner, name)`. Last registration wins.
    pub fn register(&mut self, owner: TypeId, name: impl Into<String>, step: Arc<dyn NavigateStep>) {
        self.steps.entry(owner).or_default().insert(name.into(), step);
    }

    /// Exact lookup for `(owner, name)`; no ancestor fallback.
    pub fn lookup(&self, owner: TypeId, name: &str) -> Option<Arc<dyn NavigateStep>> {
        self.steps.get(&owner).and_then(|names| names.get(name)).cloned()
    }

    /// Destination names registered directly against `owner`.
    pub fn destinations_for(&self, owner: TypeId) -> BTreeSet<String> {
        self.steps
            .get(&owner)
            .map(|names| names.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Walk `chain` in order (most-derived first) and return the first
    /// step registered under `name`.
    pub fn resolve(&self, chain: &[TypeId], name: &str) -> Option<Arc<dyn NavigateStep>> {
        chain.iter().find_map(|owner| self.lookup(*owner, name))
    }

    /// Sorted union of destination names reachable from every type in
    /// `chain`. Empty when nothing in the chain is registered.
    pub fn available_from(&self, chain: &[TypeId]) -> BTreeSet<String> {
        chain
            .iter()
            .flat_map(|owner| self.destinations_for(*owner))
            .collect()
    }
}
