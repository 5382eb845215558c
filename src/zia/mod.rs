mod client;
mod options;

pub use client::{ZiaClient, ZiaClientBuilder};
pub use options::ZiaListOptions;
