// Instance Service - orchestrates registry lookups and stop decisions
//
// The service holds no private copies of records: it reads registry entries,
// runs the stop decision, and commits the result back in place.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tracing::{info, warn};

use crate::lifecycle::decide_stop;
use crate::models::{Instance, InstanceState, StopResponse};
use crate::registry::InstanceRegistry;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested identifier is absent from the registry. The only
    /// domain-level error the stop operation can produce.
    #[error("Instance {instance_id} not found")]
    NotFound { instance_id: String },
    /// Anything outside the domain, e.g. a poisoned registry lock.
    #[error("internal registry failure: {0}")]
    Internal(String),
}

/// Service over a shared registry. Clones share the same registry, which is
/// what the HTTP layer relies on for its per-request state.
#[derive(Debug, Clone)]
pub struct InstanceService {
    registry: Arc<Mutex<InstanceRegistry>>,
}

impl InstanceService {
    pub fn new(registry: Arc<Mutex<InstanceRegistry>>) -> Self {
        Self { registry }
    }

    /// Convenience constructor over a freshly seeded registry.
    pub fn seeded() -> Self {
        Self::new(Arc::new(Mutex::new(InstanceRegistry::seeded())))
    }

    fn registry(&self) -> Result<MutexGuard<'_, InstanceRegistry>, ServiceError> {
        self.registry
            .lock()
            .map_err(|e| ServiceError::Internal(format!("registry lock poisoned: {e}")))
    }

    /// All instances in seed order.
    pub fn list_all(&self) -> Result<Vec<Instance>, ServiceError> {
        let registry = self.registry()?;
        info!(count = registry.len(), "Fetching all instances");
        Ok(registry.list())
    }

    /// Exact-match lookup; absence is a normal result, not an error.
    pub fn get_by_id(&self, instance_id: &str) -> Result<Option<Instance>, ServiceError> {
        let registry = self.registry()?;
        let instance = registry.get(instance_id).cloned();
        match &instance {
            Some(found) => info!(instance_id, name = %found.name, "Instance found"),
            None => warn!(instance_id, "Instance not found"),
        }
        Ok(instance)
    }

    /// Run the stop decision for `instance_id` and commit its resulting state.
    ///
    /// The registry lock is held across the whole get-decide-put sequence so
    /// two concurrent stops on the same id cannot both observe `running` and
    /// double-transition. The decision's resulting state is committed on every
    /// branch, declines included; on no-op branches the same state is written
    /// back, so the observable record is unchanged.
    pub fn stop(&self, instance_id: &str) -> Result<StopResponse, ServiceError> {
        let mut registry = self.registry()?;

        let instance = registry
            .get(instance_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound {
                instance_id: instance_id.to_string(),
            })?;

        let previous_state = instance.state;
        let decision = decide_stop(instance_id, previous_state);

        let mut updated = instance;
        updated.state = decision.next_state;
        registry.put(updated.id.clone(), updated);

        if decision.success {
            info!(
                instance_id,
                previous_state = %previous_state,
                current_state = %decision.next_state,
                "Instance state committed"
            );
        } else {
            warn!(
                instance_id,
                state = %previous_state,
                "Stop request declined"
            );
        }

        Ok(StopResponse {
            success: decision.success,
            message: decision.message,
            instance_id: instance_id.to_string(),
            previous_state,
            current_state: decision.next_state,
        })
    }

    /// Advance an instance from `stopping` to `stopped`.
    ///
    /// Silent no-op for any other state and for unknown ids. This is the
    /// manually-invoked progression step; no timer or background job drives
    /// it. A periodic driver, if ever wanted, would call this operation
    /// rather than grow its own transition logic.
    pub fn advance_stopping_to_stopped(&self, instance_id: &str) -> Result<(), ServiceError> {
        let mut registry = self.registry()?;

        if let Some(instance) = registry.get(instance_id) {
            if instance.state == InstanceState::Stopping {
                let mut updated = instance.clone();
                updated.state = InstanceState::Stopped;
                registry.put(updated.id.clone(), updated);
                info!(instance_id, "Instance transitioned from stopping to stopped");
            }
        }

        Ok(())
    }
}
