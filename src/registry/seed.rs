// Fixed sample fleet loaded once at startup.

use chrono::{TimeZone, Utc};

use crate::models::{AwsRegion, Instance, InstanceState, InstanceType};

/// The five sample instances the registry is seeded with. Order matters:
/// registry listing reports instances in this order.
pub fn sample_fleet() -> Vec<Instance> {
    vec![
        Instance {
            id: "i-1234567890abcdef0".to_string(),
            name: "web-server-prod".to_string(),
            instance_type: InstanceType::T3Medium,
            state: InstanceState::Running,
            region: AwsRegion::UsEast1,
            launch_time: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).single(),
            private_ip: Some("10.0.1.10".to_string()),
            public_ip: Some("54.123.45.67".to_string()),
        },
        Instance {
            id: "i-0987654321fedcba0".to_string(),
            name: "database-server".to_string(),
            instance_type: InstanceType::M5Large,
            state: InstanceState::Running,
            region: AwsRegion::UsEast1,
            launch_time: Utc.with_ymd_and_hms(2024, 1, 10, 8, 15, 0).single(),
            private_ip: Some("10.0.1.20".to_string()),
            public_ip: Some("34.567.89.123".to_string()),
        },
        Instance {
            id: "i-abcdef1234567890".to_string(),
            name: "test-environment".to_string(),
            instance_type: InstanceType::T2Micro,
            state: InstanceState::Stopped,
            region: AwsRegion::UsWest2,
            launch_time: Utc.with_ymd_and_hms(2024, 1, 20, 14, 45, 0).single(),
            private_ip: Some("10.0.2.10".to_string()),
            public_ip: None,
        },
        Instance {
            id: "i-fedcba0987654321".to_string(),
            name: "monitoring-server".to_string(),
            instance_type: InstanceType::T3Small,
            state: InstanceState::Running,
            region: AwsRegion::EuWest1,
            launch_time: Utc.with_ymd_and_hms(2024, 1, 12, 9, 20, 0).single(),
            private_ip: Some("10.0.3.10".to_string()),
            public_ip: Some("52.789.12.345".to_string()),
        },
        Instance {
            id: "i-5678901234abcdef".to_string(),
            name: "backup-server".to_string(),
            instance_type: InstanceType::C5Large,
            state: InstanceState::Stopping,
            region: AwsRegion::ApSoutheast1,
            launch_time: Utc.with_ymd_and_hms(2024, 1, 18, 16, 30, 0).single(),
            private_ip: Some("10.0.4.10".to_string()),
            public_ip: Some("13.456.78.90".to_string()),
        },
    ]
}
