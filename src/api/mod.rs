pub mod client;
pub mod envelope;
pub mod types;

pub use client::ApiClient;
pub use envelope::{Envelope, QuotaInfo};
