use crate::models::common::ResourceReference;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Custom or predefined URL category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UrlCategory {
    /// Predefined categories use symbolic ids (`OTHER_ADULT_MATERIAL`),
    /// custom ones use `CUSTOM_nn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
    #[serde(default)]
    pub custom_category: bool,
    #[serde(default)]
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub db_categorized_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords_retaining_parent_category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_urls_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls_retaining_parent_category_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<UrlCategoryScope>,
}

/// Admin scope a custom category applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UrlCategoryScope {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope_group_member_entities: Vec<ResourceReference>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub scope_entities: Option<Value>,
}
