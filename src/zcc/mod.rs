mod client;

pub use client::{ZccClient, ZccClientBuilder};
