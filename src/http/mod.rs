//! HTTP client layer — `TikwmHttp` with request pacing and mirror fallback.

pub mod client;
pub mod envelope;
pub mod pacer;

pub use client::TikwmHttp;
pub use envelope::{Envelope, QueryParams, RawEnvelope};
pub use pacer::Pacer;
