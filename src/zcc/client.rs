use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use crate::models::{CompanyInfo, Device, ForwardingProfile};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Valid values for the `osType` device filter: iOS, Android, Windows,
/// macOS and Linux.
const OS_TYPE_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

pub struct ZccClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZccClientBuilder {
    /// `base_url` is the mobile-admin API root, e.g.
    /// `https://api-mobile.zscaler.net/papi/public/v1`.
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

    pub fn build(self) -> Result<ZccClient, Error> {
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZccClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Client for the ZCC (Client Connector) mobile-admin API.
pub struct ZccClient {
    base_url: Url,
    http: HttpClient,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveDevicesRequest<'a> {
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    udids: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<&'a str>,
}

impl ZccClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ZccClientBuilder, Error> {
        ZccClientBuilder::new(base_url)
    }

    /// Retrieves company-wide Client Connector settings.
    pub fn get_company_info(&self) -> Result<CompanyInfo, Error> {
        let url = self.build_url(&["getCompanyInfo"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Lists enrolled devices, optionally filtered by OS type and user.
    pub fn list_devices(
        &self,
        os_type: Option<i32>,
        user_name: Option<&str>,
    ) -> Result<Vec<Device>, Error> {
        if let Some(os_type) = os_type {
            if !OS_TYPE_RANGE.contains(&os_type) {
                return Err(Error::Validation(format!(
                    "os_type must be between 1 and 5, got {os_type}"
                )));
            }
        }
        let url = self.build_url(&["getDevices"])?;
        let mut query = Vec::new();
        if let Some(os_type) = os_type {
            query.push(("osType", os_type.to_string()));
        }
        if let Some(user_name) = user_name {
            query.push(("username", user_name.to_string()));
        }
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, query);
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Marks devices for removal. At least one of `udids` or `user_name`
    /// must be given, per the API contract.
    pub fn remove_devices(
        &self,
        udids: &[String],
        user_name: Option<&str>,
    ) -> Result<(), Error> {
        if udids.is_empty() && user_name.is_none() {
            return Err(Error::Validation(
                "one of udids or user_name is required to remove devices".to_string(),
            ));
        }
        let url = self.build_url(&["removeDevices"])?;
        let body = RemoveDevicesRequest { udids, user_name };
        let resp = self.http.post(url).json(&body).send()?;
        self.expect_no_content(resp)
    }

    /// Lists forwarding profiles.
    pub fn list_forwarding_profiles(&self) -> Result<Vec<ForwardingProfile>, Error> {
        let url = self.build_url(&["webForwardingProfile", "listByCompany"])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Creates or updates a forwarding profile; the API keys the upsert on
    /// the profile id.
    pub fn save_forwarding_profile(
        &self,
        profile: &ForwardingProfile,
    ) -> Result<ForwardingProfile, Error> {
        let url = self.build_url(&["webForwardingProfile", "edit"])?;
        let resp = self.http.post(url).json(profile).send()?;
        self.expect_ok_json(resp)
    }

    /// Deletes a forwarding profile.
    pub fn delete_forwarding_profile(&self, profile_id: i64) -> Result<(), Error> {
        let url = self.build_url(&["webForwardingProfile", &profile_id.to_string(), "delete"])?;
        let resp = self.http.delete(url).send()?;
        self.expect_no_content(resp)
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
    use crate::test_helpers::{empty_response, json_response, serve_once};

    #[test]
    fn get_company_info_decodes_dlp_flag() {
        let body = r#"{"id": 88, "name": "Acme", "dlpEnabled": true}"#;
        let (base_url, rx, handle) = serve_once(json_response("200 OK", body));
        let client = ZccClient::builder(format!("{base_url}/papi/public/v1"))
            .expect("builder")
            .build()
            .expect("build");

        let info = client.get_company_info().expect("request");
        assert_eq!(info.name.as_deref(), Some("Acme"));
        assert_eq!(info.dlp_enabled, Some(true));

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/papi/public/v1/getCompanyInfo");

        handle.join().expect("server");
    }

    #[test]
    fn list_devices_rejects_unknown_os_type() {
        let client = ZccClient::builder("https://api-mobile.zscaler.net/papi/public/v1")
            .expect("builder")
            .build()
            .expect("build");

        let err = client.list_devices(Some(9), None).expect_err("error");
        match err {
            Error::Validation(message) => assert!(message.contains("os_type")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_devices_requires_a_selector() {
        let client = ZccClient::builder("https://api-mobile.zscaler.net/papi/public/v1")
            .expect("builder")
            .build()
            .expect("build");

        let err = client.remove_devices(&[], None).expect_err("error");
        match err {
            Error::Validation(message) => assert!(message.contains("udids")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_devices_posts_selector_body() {
        let (base_url, rx, handle) = serve_once(empty_response("204 No Content"));
        let client = ZccClient::builder(format!("{base_url}/papi/public/v1"))
            .expect("builder")
            .build()
            .expect("build");

        let udids = vec!["udid-1".to_string(), "udid-2".to_string()];
        client.remove_devices(&udids, None).expect("request");

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/papi/public/v1/removeDevices");
        assert_eq!(req.body_json()["udids"], serde_json::json!(["udid-1", "udid-2"]));

        handle.join().expect("server");
    }
}
