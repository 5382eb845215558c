mod client;

pub use client::{ZtwClient, ZtwClientBuilder};
