//! Network URL constants and upstream defaults for the tikwm API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://tikwm.com";

/// Default mirror used for the single fallback attempt.
pub const DEFAULT_FALLBACK_URL: &str = "https://tikwm.com";

/// Minimum spacing between request starts. The free tier allows roughly one
/// request per second.
pub const DEFAULT_PACING_INTERVAL: Duration = Duration::from_millis(1_100);

/// Largest page the `user/posts` endpoint accepts.
pub const MAX_USER_FEED_COUNT: u32 = 33;

/// Default per-attempt HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
