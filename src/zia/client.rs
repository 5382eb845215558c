use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

mod alert_subscriptions;
mod firewall_rules;
mod locations;
mod rule_labels;
mod url_categories;

#[cfg(test)]
mod tests;

pub struct ZiaClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZiaClientBuilder {
    /// `base_url` is the cloud-specific API root, e.g.
    /// `https://zsapi.zscaler.net/api/v1`.
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

    pub fn build(self) -> Result<ZiaClient, Error> {
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZiaClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Client for the ZIA (Internet Access) management API.
pub struct ZiaClient {
    base_url: Url,
    http: HttpClient,
}

impl ZiaClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ZiaClientBuilder, Error> {
        ZiaClientBuilder::new(base_url)
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
