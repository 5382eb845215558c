use crate::models::LocationManagement;
use crate::test_helpers::{json_response, serve_once};
use crate::zia::{ZiaClient, ZiaListOptions};

#[test]
fn list_locations_sets_pagination_query() {
    let body = r#"[{"id": 61000, "name": "HQ", "authRequired": true}]"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let options = ZiaListOptions {
        page: Some(2),
        page_size: Some(100),
        search: Some("HQ".to_string()),
    };
    let locations = client.list_locations(&options).expect("request");
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, Some(61000));
    assert!(locations[0].auth_required);

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/v1/locations");
    assert_eq!(req.query.get("page").map(String::as_str), Some("2"));
    assert_eq!(req.query.get("pageSize").map(String::as_str), Some("100"));
    assert_eq!(req.query.get("search").map(String::as_str), Some("HQ"));

    handle.join().expect("server");
}

#[test]
fn add_location_posts_camel_case_body() {
    let body = r#"{"id": 61001, "name": "Branch"}"#;
    let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let location = LocationManagement {
        name: Some("Branch".to_string()),
        up_bandwidth: Some(10000),
        ip_addresses: vec!["203.0.113.10".to_string()],
        ..LocationManagement::default()
    };
    let created = client.add_location(&location).expect("request");
    assert_eq!(created.id, Some(61001));

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/v1/locations");
    let sent = req.body_json();
    assert_eq!(sent["name"], "Branch");
    assert_eq!(sent["upBandwidth"], 10000);
    assert_eq!(sent["ipAddresses"][0], "203.0.113.10");
    assert_eq!(sent.get("dnBandwidth"), None);

    handle.join().expect("server");
}

#[test]
fn delete_location_accepts_no_content() {
    let (base_url, rx, handle) = serve_once(crate::test_helpers::empty_response("204 No Content"));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    client.delete_location(61001).expect("request");

    let req = rx.recv().expect("request");
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/v1/locations/61001");

    handle.join().expect("server");
}

#[test]
fn api_error_body_is_surfaced() {
    let body = r#"{"code": "RESOURCE_NOT_FOUND", "message": "location does not exist"}"#;
    let (base_url, _rx, handle) = serve_once(json_response("404 Not Found", body));
    let client = ZiaClient::builder(format!("{base_url}/api/v1"))
        .expect("builder")
        .build()
        .expect("build");

    let err = client.get_location(1).expect_err("error");
    match err {
        crate::Error::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.code.as_deref(), Some("RESOURCE_NOT_FOUND"));
            assert_eq!(api.message.as_deref(), Some("location does not exist"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    handle.join().expect("server");
}
