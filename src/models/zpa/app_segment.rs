use serde::{Deserialize, Serialize};

/// ZPA application segment: a set of fully-qualified domains reachable
/// through the configured server groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_group_name: Option<String>,
    /// Structured ranges (`tcpPortRange`) and the legacy flat string list
    /// (`tcpPortRanges`) both appear on the wire.
    #[serde(rename = "tcpPortRange", default, skip_serializing_if = "Vec::is_empty")]
    pub tcp_port_range: Vec<TcpPortRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tcp_port_ranges: Vec<String>,
    #[serde(rename = "udpPortRange", default, skip_serializing_if = "Vec::is_empty")]
    pub udp_port_range: Vec<TcpPortRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub udp_port_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_groups: Vec<super::ServerGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_reporting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_access_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_encrypt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_anchored: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cname_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_keep_alive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microtenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microtenant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}

/// One port range; ZPA serializes the bounds as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TcpPortRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}
