// seldns-api: Async Rust client for the Selectel DNS hosting API (domains/v1)

pub mod client;
pub mod domains;
pub mod error;
pub mod models;
pub mod records;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, DnsClient};
pub use error::Error;
pub use models::{Domain, Record, RecordPayload};
pub use transport::TransportConfig;
