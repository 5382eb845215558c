use crate::models::SegmentGroup;
use crate::test_helpers::{empty_response, json_response, serve_once};
use crate::zpa::{ZpaClient, ZpaPageOptions};

#[test]
fn add_segment_group_posts_camel_case_body() {
    let body = r#"{"id": "72058304855015425", "name": "prod"}"#;
    let (base_url, rx, handle) = serve_once(json_response("201 Created", body));
    let client = ZpaClient::builder(&base_url, "c1")
        .expect("builder")
        .build()
        .expect("build");

    let group = SegmentGroup {
        name: Some("prod".to_string()),
        enabled: Some(true),
        microtenant_id: Some("m1".to_string()),
        ..SegmentGroup::default()
    };
    let created = client.add_segment_group(&group).expect("request");
    assert_eq!(created.id.as_deref(), Some("72058304855015425"));

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/mgmtconfig/v1/admin/customers/c1/segmentGroup");
    let sent = req.body_json();
    assert_eq!(sent["name"], "prod");
    assert_eq!(sent["enabled"], true);
    assert_eq!(sent["microtenantId"], "m1");
    assert_eq!(sent.get("description"), None);

    handle.join().expect("server");
}

#[test]
fn update_segment_group_accepts_no_content() {
    let (base_url, rx, handle) = serve_once(empty_response("204 No Content"));
    let client = ZpaClient::builder(&base_url, "c1")
        .expect("builder")
        .build()
        .expect("build");

    let group = SegmentGroup {
        name: Some("prod v2".to_string()),
        ..SegmentGroup::default()
    };
    client
        .update_segment_group("72058304855015425", &group)
        .expect("request");

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "PUT");
    assert_eq!(
        req.path,
        "/mgmtconfig/v1/admin/customers/c1/segmentGroup/72058304855015425"
    );

    handle.join().expect("server");
}

#[test]
fn list_segment_groups_without_options_sends_no_query() {
    let body = r#"{"list": []}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZpaClient::builder(&base_url, "c1")
        .expect("builder")
        .build()
        .expect("build");

    let page = client
        .list_segment_groups(&ZpaPageOptions::default())
        .expect("request");
    assert!(page.list.is_empty());

    let req = rx.recv().expect("request");
    assert!(req.query.is_empty());

    handle.join().expect("server");
}
