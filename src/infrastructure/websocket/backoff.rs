use std::time::Duration;

/// Doubling reconnect delay with an upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectBackoff {
    initial_ms: u32,
    max_ms: u32,
    current_ms: u32,
}

impl ReconnectBackoff {
    pub fn new(initial_ms: u32, max_ms: u32) -> Self {
        let initial_ms = initial_ms.max(1);
        let max_ms = max_ms.max(initial_ms);
        Self { initial_ms, max_ms, current_ms: initial_ms }
    }

    /// Delay to wait now; the following one doubles up to the cap.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current_ms;
        self.current_ms = self.current_ms.saturating_mul(2).min(self.max_ms);
        Duration::from_millis(u64::from(delay))
    }

    /// Call when the first message arrives on a connection. An open that
    /// never delivers data keeps doubling.
    pub fn reset(&mut self) {
        self.current_ms = self.initial_ms;
    }
}
