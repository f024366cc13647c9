//! Signed partner API client

pub mod client;
pub mod signature;

pub use client::PartnerClient;
