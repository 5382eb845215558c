use crate::models::common::CommonIdName;
use serde::{Deserialize, Serialize};

/// Grouping of application segments sharing access policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<CommonIdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_space: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_migrated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microtenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}
