use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

mod app_connector_groups;
mod app_segments;
mod segment_groups;
mod server_groups;

#[cfg(test)]
mod tests;

pub struct ZpaClientBuilder {
    base_url: Url,
    customer_id: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZpaClientBuilder {
    /// `base_url` is the config root (e.g.
    /// `https://config.private.zscaler.com`); every request is scoped to
    /// `customer_id` under `/mgmtconfig/v1/admin/customers/`.
    pub fn new(base_url: impl AsRef<str>, customer_id: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            customer_id: customer_id.into(),
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

    pub fn build(self) -> Result<ZpaClient, Error> {
        if self.customer_id.is_empty() {
            return Err(Error::Validation("customer_id must not be empty".to_string()));
        }
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZpaClient {
            base_url: self.base_url,
            customer_id: self.customer_id,
            http,
        })
    }
}

/// Client for the ZPA (Private Access) management-config API.
pub struct ZpaClient {
    base_url: Url,
    customer_id: String,
    http: HttpClient,
}

impl ZpaClient {
    pub fn builder(
        base_url: impl AsRef<str>,
        customer_id: impl Into<String>,
    ) -> Result<ZpaClientBuilder, Error> {
        ZpaClientBuilder::new(base_url, customer_id)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_customer_url(
            &self.base_url,
            &self.customer_id,
            "v1",
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
