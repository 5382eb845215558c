use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

mod ec_groups;
mod provisioning_templates;
mod static_ips;

pub struct ZconClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZconClientBuilder {
    /// `base_url` is the connector API root, e.g.
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

    pub fn build(self) -> Result<ZconClient, Error> {
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZconClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Client for the ZCON (Cloud & Branch Connector) management API.
pub struct ZconClient {
    base_url: Url,
    http: HttpClient,
}

impl ZconClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ZconClientBuilder, Error> {
        ZconClientBuilder::new(base_url)
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
