// Lifecycle Module - Stop Decision State Machine
//
// Pure decision logic for the stop operation, separated from the registry
// and the service so it can be tested exhaustively on its own.

pub mod state_machine;

pub use state_machine::{decide_stop, StopDecision};
