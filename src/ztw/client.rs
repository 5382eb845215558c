use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

mod forwarding_rules;
mod ip_groups;
mod network_services;

/// Forward methods accepted by workload forwarding rules.
const FORWARD_METHODS: [&str; 4] = ["DIRECT", "PROXYCHAIN", "ZIA", "ZPA"];

pub struct ZtwClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZtwClientBuilder {
    /// `base_url` is the workload API root, e.g.
    /// `https://connector.zscaler.net/api/v1`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ZtwClient, Error> {
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZtwClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Client for the ZTW (Workload Communications) management API.
pub struct ZtwClient {
    base_url: Url,
    http: HttpClient,
}

impl ZtwClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ZtwClientBuilder, Error> {
        ZtwClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(
            &self.base_url,
            segments,
            common::BuildUrlOptions::SYNC_CLIENT,
        )
    }

    fn expect_ok_json<T: serde::de::DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        match resp.status() {
            StatusCode::OK | StatusCode::CREATED => resp.json::<T>().map_err(Error::from),
            _ => self.parse_error(resp),
        }
    }

    fn expect_no_content(&self, resp: Response) -> Result<(), Error> {
        match resp.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            _ => self.parse_error(resp),
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(common::parse_error_from_body(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForwardingRule, IpGroup, NetworkService, PortRange};
    use crate::test_helpers::{empty_response, json_response, serve_once};

    #[test]
    fn add_forwarding_rule_rejects_unknown_forward_method() {
        let client = ZtwClient::builder("https://connector.zscaler.net/api/v1")
            .expect("builder")
            .build()
            .expect("build");

        let rule = ForwardingRule {
            name: Some("workloads to zia".to_string()),
            forward_method: Some("TUNNEL".to_string()),
            ..ForwardingRule::default()
        };
        let err = client.add_forwarding_rule(&rule).expect_err("error");
        match err {
            Error::Validation(message) => assert!(message.contains("TUNNEL")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn add_ip_group_posts_camel_case_body() {
        let body = r#"{"id": 42, "name": "workload-sources"}"#;
        let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
        let client = ZtwClient::builder(format!("{base_url}/api/v1"))
            .expect("builder")
            .build()
            .expect("build");

        let group = IpGroup {
            name: Some("workload-sources".to_string()),
            ip_addresses: vec!["10.0.0.0/8".to_string()],
            ..IpGroup::default()
        };
        let created = client.add_ip_group(&group).expect("request");
        assert_eq!(created.id, Some(42));

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/v1/ipSourceGroups");
        let sent = req.body_json();
        assert_eq!(sent["ipAddresses"][0], "10.0.0.0/8");
        assert_eq!(sent["isNonEditable"], false);

        handle.join().expect("server");
    }

    #[test]
    fn add_network_service_posts_port_ranges() {
        let body = r#"{"id": 55, "name": "custom-https"}"#;
        let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
        let client = ZtwClient::builder(format!("{base_url}/api/v1"))
            .expect("builder")
            .build()
            .expect("build");

        let service = NetworkService {
            name: Some("custom-https".to_string()),
            service_type: Some("CUSTOM".to_string()),
            dest_tcp_ports: vec![PortRange {
                start: Some(8443),
                end: Some(8443),
            }],
            ..NetworkService::default()
        };
        let created = client.add_network_service(&service).expect("request");
        assert_eq!(created.id, Some(55));

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/v1/networkServices");
        let sent = req.body_json();
        assert_eq!(sent["type"], "CUSTOM");
        assert_eq!(sent["destTcpPorts"][0]["start"], 8443);
        assert_eq!(sent.get("srcTcpPorts"), None);

        handle.join().expect("server");
    }

    #[test]
    fn delete_network_service_accepts_no_content() {
        let (base_url, rx, handle) = serve_once(empty_response("204 No Content"));
        let client = ZtwClient::builder(format!("{base_url}/api/v1"))
            .expect("builder")
            .build()
            .expect("build");

        client.delete_network_service(55).expect("request");

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.path, "/api/v1/networkServices/55");

        handle.join().expect("server");
    }
}
