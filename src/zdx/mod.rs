mod client;
mod options;

pub use client::{ZdxClient, ZdxClientBuilder};
pub use options::ZdxTimeOptions;
