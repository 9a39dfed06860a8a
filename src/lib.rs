// Tiny Fleet Library - Simulated EC2 Fleet Management
// This exposes the core components for testing and integration

pub mod api;
pub mod config;
pub mod lifecycle;
pub mod models;
pub mod registry;
pub mod service;
pub mod telemetry;

// Re-export key types for easy access
pub use api::create_router;
pub use config::{config, init_config, TinyFleetConfig};
pub use lifecycle::{decide_stop, StopDecision};
pub use models::{AwsRegion, Instance, InstanceState, InstanceType, StopResponse};
pub use registry::InstanceRegistry;
pub use service::{InstanceService, ServiceError};
pub use telemetry::init_telemetry;
