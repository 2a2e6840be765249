//! # tikwm
//!
//! A Rust client for the tikwm TikTok metadata API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, configuration, envelope and domain records
//! 2. **HTTP** — `TikwmHttp` with request pacing and a single mirror fallback
//! 3. **High-Level Client** — `TikwmClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tikwm::prelude::*;
//!
//! let client = TikwmClient::builder()
//!     .fallback_url("https://www.tikwm.com")
//!     .build()?;
//!
//! let post = client.posts().get("https://www.tiktok.com/@user/video/123").await?;
//! let detail = client.users().detail("user").await?;
//! let recent = client.users().collect_feed("user", Some(50)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared serde helpers.
pub mod shared;

/// Domain modules (vertical slices): records and endpoint sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and upstream defaults.
pub mod network;

/// Client configuration.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with pacing and mirror fallback.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TikwmClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::post::{Author, MusicInfo, Post};
    pub use crate::domain::user::{UserDetail, UserFeed, UserProfile, UserStats};

    // Errors
    pub use crate::error::{HttpError, SdkError, SdkResult};

    // Configuration + network defaults
    pub use crate::config::ClientConfig;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_FALLBACK_URL, MAX_USER_FEED_COUNT};

    // HTTP client + sub-clients
    pub use crate::client::{PostsClient, TikwmClient, TikwmClientBuilder, UsersClient};
    pub use crate::http::{Envelope, QueryParams, TikwmHttp};
}
