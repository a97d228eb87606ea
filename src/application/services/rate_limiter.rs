use std::time::Duration;

use tokio::time::Instant;

/// Fixed-window request counter. The window restarts on the first request made
/// at least `window` after the current one began.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    request_count: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            request_count: 0,
            window_start: Instant::now(),
        }
    }

    /// Counts one request if the window has room; returns `false` otherwise.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.window_start) >= self.window {
            self.request_count = 0;
            self.window_start = now;
        }

        if self.request_count >= self.max_requests {
            return false;
        }

        self.request_count += 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.max_requests.saturating_sub(self.request_count)
    }
}
