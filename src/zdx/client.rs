use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::common;
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use crate::models::{Alert, Application, ApplicationScore, DeviceSummary, ZdxPage};
use crate::zdx::ZdxTimeOptions;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Metrics the application score endpoint accepts.
const SCORE_METRICS: [&str; 3] = ["pft", "dns", "availability"];

pub struct ZdxClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ZdxClientBuilder {
    /// `base_url` is the analytics API root, e.g.
    /// `https://api.zdxcloud.net/v1`.
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

    pub fn build(self) -> Result<ZdxClient, Error> {
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(ZdxClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Client for the ZDX (Digital Experience) analytics API. The surface is
/// read-only.
pub struct ZdxClient {
    base_url: Url,
    http: HttpClient,
}

impl ZdxClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<ZdxClientBuilder, Error> {
        ZdxClientBuilder::new(base_url)
    }

    /// Lists monitored applications with their current scores.
    pub fn list_applications(
        &self,
        options: &ZdxTimeOptions,
    ) -> Result<Vec<Application>, Error> {
        let url = self.build_url(&["apps"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one application.
    pub fn get_application(
        &self,
        app_id: i64,
        options: &ZdxTimeOptions,
    ) -> Result<Application, Error> {
        let url = self.build_url(&["apps", &app_id.to_string()])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves the score time series for one application metric. The
    /// metric name is checked against the supported set before the call.
    pub fn get_application_score(
        &self,
        app_id: i64,
        metric: &str,
        options: &ZdxTimeOptions,
    ) -> Result<ApplicationScore, Error> {
        if !SCORE_METRICS.contains(&metric) {
            return Err(Error::Validation(format!(
                "unsupported score metric {metric:?}, expected one of {SCORE_METRICS:?}"
            )));
        }
        let url = self.build_url(&["apps", &app_id.to_string(), "score"])?;
        let mut query = options.to_query_pairs();
        query.push(("metric", metric.to_string()));
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, query);
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Lists ongoing alerts.
    pub fn list_ongoing_alerts(
        &self,
        options: &ZdxTimeOptions,
    ) -> Result<ZdxPage<Alert>, Error> {
        let url = self.build_url(&["alerts", "ongoing"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Lists historical (ended) alerts.
    pub fn list_historical_alerts(
        &self,
        options: &ZdxTimeOptions,
    ) -> Result<ZdxPage<Alert>, Error> {
        let url = self.build_url(&["alerts", "historical"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one alert.
    pub fn get_alert(&self, alert_id: i64) -> Result<Alert, Error> {
        let url = self.build_url(&["alerts", &alert_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    /// Lists devices seen by ZDX.
    pub fn list_devices(
        &self,
        options: &ZdxTimeOptions,
    ) -> Result<ZdxPage<DeviceSummary>, Error> {
        let url = self.build_url(&["devices"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = req.send()?;
        self.expect_ok_json(resp)
    }

    /// Retrieves one device.
    pub fn get_device(&self, device_id: i64) -> Result<DeviceSummary, Error> {
        let url = self.build_url(&["devices", &device_id.to_string()])?;
        let resp = self.http.get(url).send()?;
        self.expect_ok_json(resp)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(
            &self.base_url,
            segments,
            common::BuildUrlOptions::SYNC_CLIENT,
        )
    }

    fn expect_ok_json<T: serde::de::DeserializeOwned>(&self, resp: Response) -> Result<T, Error> {
        if resp.status() == StatusCode::OK {
            resp.json::<T>().map_err(Error::from)
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(common::parse_error_from_body(status, &body))
    }
}
