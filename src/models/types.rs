// Closed enums for the fleet's fixed vocabulary. Wire tokens are the
// lowercase/hyphenated EC2 names; serde renames keep them exact.

use serde::{Deserialize, Serialize};

/// Lifecycle states an instance can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceState {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "shutting-down")]
    ShuttingDown,
    #[serde(rename = "terminated")]
    Terminated,
    #[serde(rename = "stopping")]
    Stopping,
    #[serde(rename = "stopped")]
    Stopped,
}

impl InstanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceState::Pending => "pending",
            InstanceState::Running => "running",
            InstanceState::ShuttingDown => "shutting-down",
            InstanceState::Terminated => "terminated",
            InstanceState::Stopping => "stopping",
            InstanceState::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instance size categories offered by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceType {
    #[serde(rename = "t2.micro")]
    T2Micro,
    #[serde(rename = "t2.small")]
    T2Small,
    #[serde(rename = "t2.medium")]
    T2Medium,
    #[serde(rename = "t3.micro")]
    T3Micro,
    #[serde(rename = "t3.small")]
    T3Small,
    #[serde(rename = "t3.medium")]
    T3Medium,
    #[serde(rename = "m5.large")]
    M5Large,
    #[serde(rename = "m5.xlarge")]
    M5Xlarge,
    #[serde(rename = "c5.large")]
    C5Large,
    #[serde(rename = "c5.xlarge")]
    C5Xlarge,
}

impl InstanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceType::T2Micro => "t2.micro",
            InstanceType::T2Small => "t2.small",
            InstanceType::T2Medium => "t2.medium",
            InstanceType::T3Micro => "t3.micro",
            InstanceType::T3Small => "t3.small",
            InstanceType::T3Medium => "t3.medium",
            InstanceType::M5Large => "m5.large",
            InstanceType::M5Xlarge => "m5.xlarge",
            InstanceType::C5Large => "c5.large",
            InstanceType::C5Xlarge => "c5.xlarge",
        }
    }
}

impl std::fmt::Display for InstanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic regions the simulation places instances in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwsRegion {
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "sa-east-1")]
    SaEast1,
}

impl AwsRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwsRegion::UsEast1 => "us-east-1",
            AwsRegion::UsWest1 => "us-west-1",
            AwsRegion::UsWest2 => "us-west-2",
            AwsRegion::EuWest1 => "eu-west-1",
            AwsRegion::EuCentral1 => "eu-central-1",
            AwsRegion::ApSoutheast1 => "ap-southeast-1",
            AwsRegion::ApNortheast1 => "ap-northeast-1",
            AwsRegion::SaEast1 => "sa-east-1",
        }
    }
}

impl std::fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
