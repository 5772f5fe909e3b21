//! Status records
//!
//! Plain serde records mirroring what a monitoring core reports per host
//! and per service. Integer-valued fields back the integer columns of the
//! tables; timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of one monitored host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRecord {
    /// Unique host name
    pub name: String,
    /// Display alias
    #[serde(default)]
    pub alias: String,
    /// Network address
    #[serde(default)]
    pub address: String,
    /// Current host state (0 up, 1 down, 2 unreachable)
    #[serde(default)]
    pub state: i64,
    /// Output of the last check plugin
    #[serde(default)]
    pub plugin_output: String,
    /// Time of the last check
    pub last_check: DateTime<Utc>,
    /// Latency of the last check in seconds
    #[serde(default)]
    pub latency: f64,
    /// Number of services configured on this host
    #[serde(default)]
    pub num_services: i64,
}

/// Status of one monitored service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Host the service runs on
    pub host_name: String,
    /// Service description, unique per host
    pub description: String,
    /// Current service state (0 ok, 1 warning, 2 critical, 3 unknown)
    #[serde(default)]
    pub state: i64,
    /// Output of the last check plugin
    #[serde(default)]
    pub plugin_output: String,
    /// Time of the last check
    pub last_check: DateTime<Utc>,
    /// Latency of the last check in seconds
    #[serde(default)]
    pub latency: f64,
    /// Check attempt the service is currently on
    #[serde(default)]
    pub current_attempt: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_record_deserializes_with_defaults() {
        let json = r#"{"name": "web01", "last_check": "2024-03-01T12:00:00Z"}"#;
        let host: HostRecord = serde_json::from_str(json).unwrap();

        assert_eq!(host.name, "web01");
        assert_eq!(host.state, 0);
        assert_eq!(host.alias, "");
        assert_eq!(host.latency, 0.0);
    }

    #[test]
    fn test_service_record_roundtrip() {
        let json = r#"{
            "host_name": "web01",
            "description": "HTTP",
            "state": 2,
            "plugin_output": "CRITICAL - connection refused",
            "last_check": "2024-03-01T12:00:00Z",
            "latency": 0.12,
            "current_attempt": 3
        }"#;
        let service: ServiceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(service.state, 2);
        assert_eq!(service.current_attempt, 3);

        let back = serde_json::to_value(&service).unwrap();
        assert_eq!(back["description"], "HTTP");
    }
}
