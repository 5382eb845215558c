mod client;

pub use client::{ZconClient, ZconClientBuilder};
