// Data model for the simulated fleet

pub mod instance;
pub mod types;

pub use instance::{Instance, StopResponse};
pub use types::{AwsRegion, InstanceState, InstanceType};
