//! Simulated Latency
//!
//! The assistant and the contact form both pretend to do work before
//! answering. Waiting goes through [`Delay`] so tests can skip it.

use std::time::Duration;

use async_trait::async_trait;

/// Strategy trait for the simulated "thinking" pause
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspend for `duration` (or not at all)
    async fn wait(&self, duration: Duration);
}

/// Real timer backed by tokio
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits() {
        let start = tokio::time::Instant::now();
        TokioDelay.wait(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_is_instant() {
        let start = tokio::time::Instant::now();
        NoDelay.wait(Duration::from_secs(60)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
