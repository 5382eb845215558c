mod client;
mod options;

pub use client::{ZpaClient, ZpaClientBuilder};
pub use options::ZpaPageOptions;
