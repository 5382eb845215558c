use crate::models::common::ResourceReference;
use serde::{Deserialize, Serialize};

/// Cloud firewall filtering rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FirewallFilteringRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    /// `ALLOW`, `BLOCK_DROP`, `BLOCK_RESET` or `BLOCK_ICMP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// `ENABLED` or `DISABLED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub enable_full_logging: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub src_ips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dest_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dest_ip_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dest_countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nw_services: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nw_service_groups: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_groups: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control: Option<String>,
    #[serde(default)]
    pub default_rule: bool,
    #[serde(default)]
    pub predefined: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_references_encode_as_mappings() {
        let rule = FirewallFilteringRule {
            name: Some("Block FTP".to_string()),
            action: Some("BLOCK_DROP".to_string()),
            nw_services: vec![ResourceReference {
                id: Some(774),
                name: Some("FTP".to_string()),
                ..ResourceReference::default()
            }],
            ..FirewallFilteringRule::default()
        };
        let wire = serde_json::to_value(&rule).expect("encode");
        assert_eq!(wire["nwServices"], json!([{"id": 774, "name": "FTP"}]));
        assert_eq!(wire["enableFullLogging"], json!(false));
    }

    #[test]
    fn absent_lists_decode_empty() {
        let rule: FirewallFilteringRule =
            serde_json::from_value(json!({"id": 1, "name": "r"})).expect("decode");
        assert!(rule.src_ips.is_empty());
        assert!(rule.labels.is_empty());
    }
}
