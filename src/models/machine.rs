//! Machine models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::primitives::MachineId;

/// A cluster member running the fleet agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine ID
    pub id: MachineId,
    /// IP address other members reach this machine on
    #[serde(rename = "primaryIP", default)]
    pub primary_ip: String,
    /// Metadata the machine was started with
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_machine() {
        let json = r#"{
            "id": "2c0f4b5e",
            "primaryIP": "10.0.0.5",
            "metadata": {"region": "us-east", "disk": "ssd"}
        }"#;

        let machine: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(machine.id.as_str(), "2c0f4b5e");
        assert_eq!(machine.primary_ip, "10.0.0.5");
        assert_eq!(machine.metadata.get("region").map(String::as_str), Some("us-east"));
    }

    #[test]
    fn test_metadata_optional() {
        let machine: Machine = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert!(machine.metadata.is_empty());
        assert!(machine.primary_ip.is_empty());
    }
}
