//! Request pacing
//!
//! The crawler waits a fixed delay before every fetch except the first one of
//! a crawl. No adaptive backoff, no per-host state.

use std::time::Duration;

/// Fixed-delay throttle for one crawl
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    fetches: u64,
}

impl Pacer {
    /// Creates a pacer that waits `delay` between fetches
    pub fn new(delay: Duration) -> Self {
        Self { delay, fetches: 0 }
    }

    /// Waits until the next fetch may start
    ///
    /// Returns immediately for the first fetch; every later call sleeps for
    /// the configured delay.
    pub async fn wait_turn(&mut self) {
        if self.fetches > 0 {
            tracing::debug!("Waiting {:?} before the next fetch", self.delay);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }
        self.fetches += 1;
    }

    /// Number of fetches granted so far
    pub fn fetches(&self) -> u64 {
        self.fetches
    }

    /// Number of delays issued so far (one fewer than the fetches)
    pub fn pauses(&self) -> u64 {
        self.fetches.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_turn_does_not_wait() {
        let mut pacer = Pacer::new(Duration::from_secs(60));
        let start = Instant::now();
        pacer.wait_turn().await;
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(pacer.fetches(), 1);
        assert_eq!(pacer.pauses(), 0);
    }

    #[tokio::test]
    async fn test_later_turns_wait() {
        let mut pacer = Pacer::new(Duration::from_millis(30));
        let start = Instant::now();
        for _ in 0..3 {
            pacer.wait_turn().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(60));
        assert_eq!(pacer.pauses(), 2);
    }

    #[test]
    fn test_no_fetches_no_pauses() {
        let pacer = Pacer::new(Duration::from_secs(1));
        assert_eq!(pacer.pauses(), 0);
        assert_eq!(pacer.fetches(), 0);
    }
}
