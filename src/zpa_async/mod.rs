mod client;

pub use client::{ZpaAsyncClient, ZpaAsyncClientBuilder};
