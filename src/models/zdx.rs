use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Monitored application with its current ZDX score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<i64>,
    /// Region/location breakdown is loosely typed on the wire.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub most_impacted_region: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub stats: Option<Value>,
}

/// Time series of one application metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datapoints: Vec<Datapoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Datapoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Ongoing or historical ZDX alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub application: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "crate::convert::serialize_camelized_list"
    )]
    pub departments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_on: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_on: Option<i64>,
}

/// Device as seen by the ZDX analytics surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub hardware: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub software: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub network: Option<Value>,
}

/// List envelope used by the ZDX endpoints that page with `next_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZdxPage<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<T>,
}

impl<T> Default for ZdxPage<T> {
    fn default() -> Self {
        Self {
            next_offset: None,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passthrough_department_keys_are_camelized_on_encode() {
        let alert = Alert {
            id: Some(7),
            departments: vec![json!({"dept_id": 12, "num_devices": 3})],
            ..Alert::default()
        };
        let wire = serde_json::to_value(&alert).expect("encode");
        assert_eq!(
            wire["departments"],
            json!([{"deptId": 12, "numDevices": 3}])
        );
    }

    #[test]
    fn passthrough_hardware_block_round_trips_camelized() {
        let device: DeviceSummary = serde_json::from_value(json!({
            "id": 1,
            "hardware": {"memTotal": 16384}
        }))
        .expect("decode");
        let wire = serde_json::to_value(&device).expect("encode");
        assert_eq!(wire["hardware"], json!({"memTotal": 16384}));
    }
}
