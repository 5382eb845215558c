#![forbid(unsafe_code)]

//! Client SDK for the Zscaler cloud security management APIs.
//!
//! One client per product surface: [`ZiaClient`] (Internet Access),
//! [`ZpaClient`] (Private Access), [`ZccClient`] (Client Connector),
//! [`ZdxClient`] (Digital Experience), [`ZconClient`] (Cloud & Branch
//! Connector) and [`ZtwClient`] (Workload Communications). Request and
//! response bodies are typed models under [`models`], which serialize to
//! the camelCase wire schema and decode missing keys to defaults.

mod client_defaults;
mod common;
pub mod convert;
mod error;
pub mod models;
mod zcc;
mod zcon;
mod zdx;
mod zia;
mod zpa;
#[cfg(feature = "async-client")]
mod zpa_async;
mod ztw;

#[cfg(test)]
mod test_helpers;

pub use error::{ApiError, Error};

pub use zcc::{ZccClient, ZccClientBuilder};
pub use zcon::{ZconClient, ZconClientBuilder};
pub use zdx::{ZdxClient, ZdxClientBuilder, ZdxTimeOptions};
pub use zia::{ZiaClient, ZiaClientBuilder, ZiaListOptions};
pub use zpa::{ZpaClient, ZpaClientBuilder, ZpaPageOptions};
#[cfg(feature = "async-client")]
pub use zpa_async::{ZpaAsyncClient, ZpaAsyncClientBuilder};
pub use ztw::{ZtwClient, ZtwClientBuilder};
