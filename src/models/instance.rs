use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{AwsRegion, InstanceState, InstanceType};

/// A simulated EC2 instance record
///
/// Identifiers are unique within the registry; every instance carries exactly
/// one current state. Network addresses are stored verbatim as strings since
/// the sample data is not guaranteed to be valid IPv4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: InstanceType,
    pub state: InstanceState,
    pub region: AwsRegion,
    pub launch_time: Option<DateTime<Utc>>,
    pub private_ip: Option<String>,
    pub public_ip: Option<String>,
}

/// Outcome of a stop request. Produced fresh per call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResponse {
    pub success: bool,
    pub message: String,
    pub instance_id: String,
    pub previous_state: InstanceState,
    pub current_state: InstanceState,
}
