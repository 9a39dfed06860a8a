use crate::models::InstanceState;

/// Decision produced by the stop state machine.
///
/// Reports intent only: `next_state` is the state the caller should commit,
/// the machine itself never touches the registry. `success: false` marks a
/// business decline, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct StopDecision {
    pub success: bool,
    pub next_state: InstanceState,
    pub message: String,
}

/// Decide the outcome of a stop request for an instance currently in `state`.
///
/// Pure function of the state, no randomness or timing. The match is
/// exhaustive so adding a new `InstanceState` forces a review of this table.
/// Nothing here advances `stopping` to `stopped`; that is a separate,
/// explicitly-invoked service operation.
pub fn decide_stop(instance_id: &str, state: InstanceState) -> StopDecision {
    match state {
        InstanceState::Stopped => StopDecision {
            success: false,
            next_state: InstanceState::Stopped,
            message: format!("Instance {instance_id} is already stopped"),
        },
        InstanceState::Stopping | InstanceState::ShuttingDown => StopDecision {
            success: false,
            next_state: state,
            message: format!("Instance {instance_id} is already stopping"),
        },
        InstanceState::Terminated => StopDecision {
            success: false,
            next_state: InstanceState::Terminated,
            message: format!("Instance {instance_id} is terminated and cannot be stopped"),
        },
        InstanceState::Running => StopDecision {
            success: true,
            next_state: InstanceState::Stopping,
            message: format!("Instance {instance_id} is now stopping"),
        },
        // Any remaining state is forced straight to stopped.
        InstanceState::Pending => StopDecision {
            success: true,
            next_state: InstanceState::Stopped,
            message: format!("Instance {instance_id} stopped successfully"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_begins_graceful_stop() {
        let decision = decide_stop("i-test", InstanceState::Running);

        assert!(decision.success);
        assert_eq!(decision.next_state, InstanceState::Stopping);
        assert_eq!(decision.message, "Instance i-test is now stopping");
    }

    #[test]
    fn test_stopped_is_a_no_op_decline() {
        let decision = decide_stop("i-test", InstanceState::Stopped);

        assert!(!decision.success);
        assert_eq!(decision.next_state, InstanceState::Stopped);
        assert!(decision.message.contains("already stopped"));
    }

    #[test]
    fn test_in_progress_states_decline_and_keep_state() {
        for state in [InstanceState::Stopping, InstanceState::ShuttingDown] {
            let decision = decide_stop("i-test", state);
            assert!(!decision.success);
            assert_eq!(decision.next_state, state);
            assert!(decision.message.contains("already stopping"));
        }
    }

    #[test]
    fn test_terminated_cannot_be_stopped() {
        let decision = decide_stop("i-test", InstanceState::Terminated);

        assert!(!decision.success);
        assert_eq!(decision.next_state, InstanceState::Terminated);
        assert!(decision.message.contains("terminated"));
    }

    #[test]
    fn test_pending_is_forced_to_stopped() {
        let decision = decide_stop("i-test", InstanceState::Pending);

        assert!(decision.success);
        assert_eq!(decision.next_state, InstanceState::Stopped);
        assert!(decision.message.contains("stopped successfully"));
    }

    #[test]
    fn test_decision_is_deterministic() {
        let first = decide_stop("i-test", InstanceState::Running);
        let second = decide_stop("i-test", InstanceState::Running);
        assert_eq!(first, second);
    }
}
