// Instance Registry - in-memory store of instance records
//
// The registry exclusively owns all instance records. Absence is a normal,
// non-exceptional result; none of the operations can fail.

pub mod seed;

use std::collections::HashMap;

use crate::models::Instance;

/// In-memory store of instance records keyed by identifier.
/// Listing preserves insertion order, so a seeded registry lists
/// instances in seed order.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    records: HashMap<String, Instance>,
    order: Vec<String>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry populated with the fixed sample fleet.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        for instance in seed::sample_fleet() {
            registry.put(instance.id.clone(), instance);
        }
        registry
    }

    /// All known instances in insertion order.
    pub fn list(&self) -> Vec<Instance> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    /// Exact-match lookup by identifier. No partial matching.
    pub fn get(&self, id: &str) -> Option<&Instance> {
        self.records.get(id)
    }

    /// Store or replace the record under `id`. Replacing keeps the
    /// original insertion position.
    pub fn put(&mut self, id: String, instance: Instance) {
        if !self.records.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.records.insert(id, instance);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
