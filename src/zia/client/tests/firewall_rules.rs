use crate::models::{FirewallFilteringRule, ResourceReference};
use crate::test_helpers::{empty_response, json_response, serve_once};
use crate::zia::ZiaClient;

#[test]
fn list_firewall_rules_hits_expected_path() {
    let body = r#"[{"id": 900, "name": "Block FTP", "action": "BLOCK_DROP"}]"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let rules = client.list_firewall_rules().expect("request");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].action.as_deref(), Some("BLOCK_DROP"));

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/v1/firewallFilteringRules");

    handle.join().expect("server");
}

#[test]
fn add_firewall_rule_posts_nested_references() {
    let body = r#"{"id": 901, "name": "Block FTP"}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let rule = FirewallFilteringRule {
        name: Some("Block FTP".to_string()),
        action: Some("BLOCK_DROP".to_string()),
        order: Some(1),
        nw_services: vec![ResourceReference {
            id: Some(774),
            name: Some("FTP".to_string()),
            ..ResourceReference::default()
        }],
        ..FirewallFilteringRule::default()
    };
    let created = client.add_firewall_rule(&rule).expect("request");
    assert_eq!(created.id, Some(901));

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/v1/firewallFilteringRules");
    let sent = req.body_json();
    assert_eq!(sent["nwServices"][0]["id"], 774);
    assert_eq!(sent["enableFullLogging"], false);
    assert_eq!(sent.get("srcIps"), None);

    handle.join().expect("server");
}

#[test]
fn update_firewall_rule_puts_to_rule_path() {
    let body = r#"{"id": 901, "name": "Block FTP", "state": "DISABLED"}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let rule = FirewallFilteringRule {
        name: Some("Block FTP".to_string()),
        state: Some("DISABLED".to_string()),
        ..FirewallFilteringRule::default()
    };
    let updated = client.update_firewall_rule(901, &rule).expect("request");
    assert_eq!(updated.state.as_deref(), Some("DISABLED"));

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/v1/firewallFilteringRules/901");

    handle.join().expect("server");
}

#[test]
fn delete_firewall_rule_accepts_no_content() {
    let (base_url, rx, handle) = serve_once(empty_response("204 No Content"));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    client.delete_firewall_rule(901).expect("request");

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/v1/firewallFilteringRules/901");

    handle.join().expect("server");
}
