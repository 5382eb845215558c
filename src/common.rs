use crate::error::{fallback_message, ApiError, Error};
use reqwest::blocking::RequestBuilder as BlockingRequestBuilder;
use reqwest::RequestBuilder as AsyncRequestBuilder;
use reqwest::StatusCode;
use url::Url;

pub(crate) trait RequestBuilderExt: Sized {
    fn with_query(self, params: &[(&'static str, String)]) -> Self;
}

impl RequestBuilderExt for BlockingRequestBuilder {
    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }
}

impl RequestBuilderExt for AsyncRequestBuilder {
    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }
}

/// How much of the base URL gets reset before path segments are appended.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildUrlOptions {
    pub clear_query: bool,
    pub clear_fragment: bool,
    /// Drop a trailing empty segment left by a `/`-terminated base.
    pub pop_if_empty: bool,
}

impl BuildUrlOptions {
    /// Sync clients keep whatever query/fragment the configured base
    /// carries and only trim the trailing empty segment.
    pub const SYNC_CLIENT: Self = Self {
        clear_query: false,
        clear_fragment: false,
        pop_if_empty: true,
    };

    /// Request URLs built from scratch start from a clean base.
    #[cfg_attr(not(feature = "async-client"), allow(dead_code))]
    pub const REQUEST: Self = Self {
        clear_query: true,
        clear_fragment: true,
        pop_if_empty: true,
    };
}

pub(crate) fn build_url(
    base_url: &Url,
    segments: &[&str],
    options: BuildUrlOptions,
) -> Result<Url, Error> {
    let mut url = base_url.clone();
    if options.clear_query {
        url.set_query(None);
    }
    if options.clear_fragment {
        url.set_fragment(None);
    }
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if options.pop_if_empty {
            path_segments.pop_if_empty();
        }
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}

/// Builds a ZPA management-config URL scoped to one customer:
/// `<base>/mgmtconfig/<version>/admin/customers/<customer_id>/<segments...>`.
pub(crate) fn build_customer_url(
    base_url: &Url,
    customer_id: &str,
    version: &str,
    segments: &[&str],
    options: BuildUrlOptions,
) -> Result<Url, Error> {
    let mut url = base_url.clone();
    if options.clear_query {
        url.set_query(None);
    }
    if options.clear_fragment {
        url.set_fragment(None);
    }
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if options.pop_if_empty {
            path_segments.pop_if_empty();
        }
        for segment in ["mgmtconfig", version, "admin", "customers", customer_id] {
            path_segments.push(segment);
        }
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}

pub(crate) fn apply_query_params<B: RequestBuilderExt>(
    req: B,
    params: Vec<(&'static str, String)>,
) -> B {
    if params.is_empty() {
        req
    } else {
        req.with_query(&params)
    }
}

pub(crate) fn parse_error_from_body(status: StatusCode, body: &[u8]) -> Error {
    let fallback = fallback_message(status, body);
    let mut err = serde_json::from_slice::<ApiError>(body).unwrap_or_else(|_| ApiError {
        status: status.as_u16() as i32,
        message: Some(fallback.clone()),
        ..ApiError::default()
    });
    if err.status == 0 {
        err.status = status.as_u16() as i32;
    }
    if err.message.is_none() && err.reason.is_none() {
        err.message = Some(fallback);
    }
    Error::Api(err)
}
