//! Request pacing.
//!
//! The pacer hands out request slots at least `interval` apart. A caller that
//! gets a slot arms the next one `interval` after its own start, so the spacing
//! holds regardless of how long (or whether) the request itself completes.

use std::time::{Duration, Instant};

use async_lock::Mutex;
use futures_timer::Delay;

/// Shared by every clone of a transport.
#[derive(Debug, Default)]
pub struct Pacer {
    /// Earliest instant the next request may start.
    next_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next request slot and return the instant it was granted.
    /// A zero interval returns immediately without touching the lock.
    ///
    /// The lock is held across the wait so that waiters queue behind the
    /// current slot instead of all waking at the same instant.
    pub async fn wait_turn(&self, interval: Duration) -> Instant {
        if interval.is_zero() {
            return Instant::now();
        }

        let mut next_slot = self.next_slot.lock().await;
        if let Some(at) = *next_slot {
            let now = Instant::now();
            if at > now {
                let wait = at - now;
                tracing::trace!(wait_ms = wait.as_millis() as u64, "Waiting for request slot");
                Delay::new(wait).await;
            }
        }
        let granted = Instant::now();
        *next_slot = Some(granted + interval);
        granted
    }
}
