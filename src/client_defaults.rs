use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!("zscaler-rust/", env!("CARGO_PKG_VERSION"));
