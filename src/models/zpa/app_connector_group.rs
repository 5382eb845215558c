use serde::{Deserialize, Serialize};

/// Deployment group of app connectors in one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConnectorGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Coordinates are serialized as strings on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_time_in_secs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_version_profile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_query_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_quick_ack_app: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_quick_ack_assistant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_quick_ack_read_assistant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_in_dr_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microtenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}
