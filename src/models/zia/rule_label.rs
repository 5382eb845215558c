use crate::models::common::{LastModifiedInfo, ResourceReference};
use serde::{Deserialize, Serialize};

/// Label that rules across ZIA policy types can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuleLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub last_modified: LastModifiedInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_rule_count: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn audit_block_flattens_onto_the_label() {
        let label: RuleLabel = serde_json::from_value(json!({
            "id": 3,
            "name": "prod",
            "lastModifiedTime": 1700000000,
            "lastModifiedBy": {"id": 44, "name": "admin"}
        }))
        .expect("decode");
        assert_eq!(label.last_modified.last_modified_time, Some(1_700_000_000));
        assert_eq!(
            label
                .last_modified
                .last_modified_by
                .as_ref()
                .and_then(|by| by.name.as_deref()),
            Some("admin")
        );
        let wire = serde_json::to_value(&label).expect("encode");
        assert_eq!(wire["lastModifiedTime"], json!(1_700_000_000));
    }
}
