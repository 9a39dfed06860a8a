//! Stop lifecycle tests
//!
//! These tests verify the stop operation end to end through the service:
//! decision outcomes per state, registry commits, idempotence, and the
//! manual stopping-to-stopped progression.

use tiny_fleet::{
    decide_stop, InstanceRegistry, InstanceService, InstanceState, ServiceError,
};
use std::sync::{Arc, Mutex};

fn seeded_service() -> InstanceService {
    InstanceService::new(Arc::new(Mutex::new(InstanceRegistry::seeded())))
}

#[test]
fn test_stopping_a_running_instance_commits_stopping() {
    let service = seeded_service();

    let result = service.stop("i-1234567890abcdef0").unwrap();

    assert!(result.success);
    assert_eq!(result.instance_id, "i-1234567890abcdef0");
    assert_eq!(result.previous_state, InstanceState::Running);
    assert_eq!(result.current_state, InstanceState::Stopping);

    let stored = service.get_by_id("i-1234567890abcdef0").unwrap().unwrap();
    assert_eq!(stored.state, InstanceState::Stopping);
}

#[test]
fn test_every_running_instance_accepts_stop() {
    let service = seeded_service();
    let running: Vec<_> = service
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|i| i.state == InstanceState::Running)
        .collect();
    assert!(!running.is_empty());

    for instance in running {
        let result = service.stop(&instance.id).unwrap();
        assert!(result.success, "stop of {} should succeed", instance.id);
        assert_eq!(result.current_state, InstanceState::Stopping);

        let stored = service.get_by_id(&instance.id).unwrap().unwrap();
        assert_eq!(stored.state, InstanceState::Stopping);
    }
}

#[test]
fn test_stopping_a_stopped_instance_declines() {
    let service = seeded_service();

    let result = service.stop("i-abcdef1234567890").unwrap();

    assert!(!result.success);
    assert_eq!(result.previous_state, InstanceState::Stopped);
    assert_eq!(result.current_state, InstanceState::Stopped);
    assert!(result.message.contains("already stopped"));
}

#[test]
fn test_stopping_an_in_progress_instance_declines() {
    let service = seeded_service();

    // Seeded backup-server is already stopping.
    let result = service.stop("i-5678901234abcdef").unwrap();

    assert!(!result.success);
    assert_eq!(result.previous_state, InstanceState::Stopping);
    assert_eq!(result.current_state, InstanceState::Stopping);
    assert!(result.message.contains("already stopping"));
}

#[test]
fn test_shutting_down_counts_as_in_progress() {
    let decision = decide_stop("i-any", InstanceState::ShuttingDown);
    assert!(!decision.success);
    assert_eq!(decision.next_state, InstanceState::ShuttingDown);
    assert!(decision.message.contains("already stopping"));
}

#[test]
fn test_terminated_instance_cannot_be_stopped() {
    let decision = decide_stop("i-any", InstanceState::Terminated);
    assert!(!decision.success);
    assert_eq!(decision.next_state, InstanceState::Terminated);
}

#[test]
fn test_stop_unknown_id_is_not_found_never_a_decline() {
    let service = seeded_service();

    let err = service.stop("i-nonexistent").unwrap_err();

    match err {
        ServiceError::NotFound { instance_id } => {
            assert_eq!(instance_id, "i-nonexistent");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_stop_is_idempotent_after_first_transition() {
    let service = seeded_service();

    let first = service.stop("i-1234567890abcdef0").unwrap();
    assert!(first.success);
    assert_eq!(first.current_state, InstanceState::Stopping);

    let second = service.stop("i-1234567890abcdef0").unwrap();
    assert!(!second.success);
    assert_eq!(second.previous_state, InstanceState::Stopping);
    assert_eq!(second.current_state, InstanceState::Stopping);

    let stored = service.get_by_id("i-1234567890abcdef0").unwrap().unwrap();
    assert_eq!(stored.state, InstanceState::Stopping);
}

#[test]
fn test_advance_transitions_only_stopping_instances() {
    let service = seeded_service();

    service
        .advance_stopping_to_stopped("i-5678901234abcdef")
        .unwrap();
    let advanced = service.get_by_id("i-5678901234abcdef").unwrap().unwrap();
    assert_eq!(advanced.state, InstanceState::Stopped);

    // Every non-stopping instance is left as-is.
    let before = service.list_all().unwrap();
    for instance in &before {
        service.advance_stopping_to_stopped(&instance.id).unwrap();
    }
    let after = service.list_all().unwrap();
    assert_eq!(before, after);

    // Absent id is a silent no-op.
    service.advance_stopping_to_stopped("i-nonexistent").unwrap();
}

#[test]
fn test_full_graceful_stop_cycle() {
    let service = seeded_service();

    let result = service.stop("i-fedcba0987654321").unwrap();
    assert!(result.success);
    assert_eq!(result.current_state, InstanceState::Stopping);

    service
        .advance_stopping_to_stopped("i-fedcba0987654321")
        .unwrap();
    let stored = service.get_by_id("i-fedcba0987654321").unwrap().unwrap();
    assert_eq!(stored.state, InstanceState::Stopped);

    let final_stop = service.stop("i-fedcba0987654321").unwrap();
    assert!(!final_stop.success);
    assert!(final_stop.message.contains("already stopped"));
}

#[test]
fn test_list_preserves_seed_order_across_mutation() {
    let service = seeded_service();
    let before: Vec<_> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();

    service.stop("i-1234567890abcdef0").unwrap();

    let after: Vec<_> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(before, after);
    assert_eq!(after.len(), 5);
}
