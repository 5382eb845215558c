use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ZIA location (or sub-location) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_bandwidth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dn_bandwidth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default)]
    pub auth_required: bool,
    #[serde(default)]
    pub ssl_scan_enabled: bool,
    #[serde(default)]
    pub zapp_ssl_scan_enabled: bool,
    #[serde(default)]
    pub xff_forward_enabled: bool,
    #[serde(default)]
    pub surrogate_ip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_time_in_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time_unit: Option<String>,
    #[serde(default)]
    pub surrogate_ip_enforced_for_known_browsers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surrogate_refresh_time_in_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surrogate_refresh_time_unit: Option<String>,
    #[serde(default)]
    pub ofw_enabled: bool,
    #[serde(default)]
    pub ips_control: bool,
    #[serde(default)]
    pub aup_enabled: bool,
    #[serde(default)]
    pub caution_enabled: bool,
    #[serde(default)]
    pub aup_block_internet_until_accepted: bool,
    #[serde(default)]
    pub aup_force_ssl_inspection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aup_timeout_in_days: Option<i32>,
    /// VPN credential assignments are loosely typed on the wire; carried
    /// through without a typed wrapper, keys camelized on encode.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::convert::serialize_camelized"
    )]
    pub vpn_credentials: Option<Value>,
}
