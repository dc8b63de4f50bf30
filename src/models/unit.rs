//! Unit models.

use serde::{Deserialize, Serialize};

use super::enums::DesiredState;
use super::primitives::{MachineId, UnitName};

/// A unit file known to fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unit name, including its type suffix
    pub name: UnitName,
    /// Contents of the unit file
    #[serde(default)]
    pub options: Vec<UnitOption>,
    /// State fleet is driving the unit towards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<DesiredState>,
    /// State the unit is currently in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<DesiredState>,
    /// Machine the unit is scheduled on
    #[serde(rename = "machineID", default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<MachineId>,
}

impl Unit {
    /// Create a unit that will be launched once submitted.
    pub fn new(name: impl Into<UnitName>, options: Vec<UnitOption>) -> Self {
        Self {
            name: name.into(),
            options,
            desired_state: Some(DesiredState::Launched),
            current_state: None,
            machine_id: None,
        }
    }

    /// Set the desired state.
    pub fn with_desired_state(mut self, state: DesiredState) -> Self {
        self.desired_state = Some(state);
        self
    }

    /// Value of the first option matching `section` and `name`.
    pub fn option(&self, section: &str, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.section == section && o.name == name)
            .map(|o| o.value.as_str())
    }
}

/// A single `Name=Value` line of a unit file, with its `[Section]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOption {
    /// Section the option belongs to, e.g. `Service`
    pub section: String,
    /// Option name, e.g. `ExecStart`
    pub name: String,
    /// Option value
    pub value: String,
}

impl UnitOption {
    /// Create a unit option.
    pub fn new(
        section: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_unit() {
        let json = r#"{
            "name": "web@1.service",
            "options": [
                {"section": "Service", "name": "ExecStart", "value": "/usr/bin/sleep 1000"}
            ],
            "desiredState": "launched",
            "currentState": "loaded",
            "machineID": "2c0f4b5e"
        }"#;

        let unit: Unit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.name.as_str(), "web@1.service");
        assert_eq!(unit.desired_state, Some(DesiredState::Launched));
        assert_eq!(unit.current_state, Some(DesiredState::Loaded));
        assert_eq!(unit.machine_id, Some(MachineId::new("2c0f4b5e")));
        assert_eq!(
            unit.option("Service", "ExecStart"),
            Some("/usr/bin/sleep 1000")
        );
    }

    #[test]
    fn test_serialize_new_unit() {
        let unit = Unit::new(
            "web.service",
            vec![UnitOption::new("Service", "ExecStart", "/bin/true")],
        );
        let value = serde_json::to_value(&unit).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "web.service",
                "options": [{"section": "Service", "name": "ExecStart", "value": "/bin/true"}],
                "desiredState": "launched"
            })
        );
    }
}
