use serde::{Deserialize, Serialize};

/// Company-wide Client Connector settings, as returned by
/// `getCompanyInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dlp_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_two_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_tunnel_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_cleanup_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Device enrolled with Client Connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn_state: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_time: Option<i64>,
}

/// Forwarding profile controlling how Client Connector steers traffic
/// per network environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_search_domains: Vec<DnsSearchDomainsEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,
    #[serde(rename = "enableLWFDriver", default, skip_serializing_if = "Option::is_none")]
    pub enable_lwf_driver: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate_trusted_network: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forwarding_profile_actions: Vec<ForwardingProfileAction>,
}

/// DNS search-domain entry used for trusted-network detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DnsSearchDomainsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_dns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_dns: Option<String>,
}

/// Per-network-type steering action within a forwarding profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingProfileAction {
    /// The wire key is the acronym-cased `DTLSTimeout`.
    #[serde(rename = "DTLSTimeout", default, skip_serializing_if = "Option::is_none")]
    pub dtls_timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_based_zen_enablement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu_for_zadapter: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_web_traffic: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dlp_enabled_encodes_to_documented_key() {
        let info = CompanyInfo {
            dlp_enabled: Some(true),
            ..CompanyInfo::default()
        };
        let wire = serde_json::to_value(&info).expect("encode");
        assert_eq!(wire, json!({"dlpEnabled": true}));
    }

    #[test]
    fn forwarding_profile_actions_encode_as_nested_mappings() {
        let profile = ForwardingProfile {
            name: Some("corp".to_string()),
            forwarding_profile_actions: vec![ForwardingProfileAction {
                dtls_timeout: Some(60),
                network_type: Some(1),
                ..ForwardingProfileAction::default()
            }],
            ..ForwardingProfile::default()
        };
        let wire = serde_json::to_value(&profile).expect("encode");
        assert_eq!(
            wire["forwardingProfileActions"],
            json!([{"DTLSTimeout": 60, "networkType": 1}])
        );
    }

    #[test]
    fn lwf_driver_key_round_trips() {
        let profile: ForwardingProfile =
            serde_json::from_value(json!({"enableLWFDriver": true})).expect("decode");
        assert_eq!(profile.enable_lwf_driver, Some(true));
        let wire = serde_json::to_value(&profile).expect("encode");
        assert_eq!(wire, json!({"enableLWFDriver": true}));
    }
}
