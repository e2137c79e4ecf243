//! Waits out a delay without holding a worker thread.

use std::sync::Arc;

use crate::responder::{Clock, Delay, DelayResponse, SystemClock};

/// Handles a single delay request end to end.
///
/// Cheap to clone; the only shared piece is the read-only clock.
#[derive(Debug, Clone)]
pub struct DelayResponder {
    clock: Arc<dyn Clock>,
}

impl DelayResponder {
    /// Responder backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Sleep for `delay` and report the window that was slept.
    ///
    /// The sleep is a tokio timer, so the calling task yields and other
    /// requests keep running on the same worker.
    pub async fn respond(&self, delay: Delay) -> DelayResponse {
        tracing::info!("got request, delay={}", delay);

        let start_time = self.clock.now();
        tokio::time::sleep(delay.as_duration()).await;
        let end_time = self.clock.now();

        tracing::debug!(
            delay = %delay,
            elapsed_ms = end_time.since(&start_time).num_milliseconds(),
            "wait finished"
        );

        DelayResponse {
            delay,
            start_time,
            end_time,
        }
    }
}

impl Default for DelayResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::clock::TokioClock;
    use std::time::Duration;
    use tokio::time::Instant;

    fn responder() -> DelayResponder {
        DelayResponder::with_clock(Arc::new(TokioClock::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_matches_delay() {
        let response = responder()
            .respond(Delay::from_secs_f64(1.5).unwrap())
            .await;

        let elapsed = response.end_time.since(&response.start_time);
        assert!((1500..1510).contains(&elapsed.num_milliseconds()));
        assert!(response
            .to_string()
            .starts_with("Slept 1.5 s from 2024-01-01 00:00:00.000 to 2024-01-01 00:00:01.50"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let response = responder()
            .respond(Delay::from_secs_f64(0.0).unwrap())
            .await;

        let elapsed = response.end_time.since(&response.start_time);
        assert!(elapsed.num_milliseconds() <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_waits_overlap() {
        let responder = responder();
        let started = Instant::now();

        let (a, b) = tokio::join!(
            responder.respond(Delay::from_secs_f64(1.0).unwrap()),
            responder.respond(Delay::from_secs_f64(1.0).unwrap()),
        );

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(1));
        assert!(elapsed < Duration::from_millis(1100), "waits ran back to back: {:?}", elapsed);
        assert!(a.end_time.since(&b.start_time).num_milliseconds() >= 1000);
        assert!(b.end_time.since(&a.start_time).num_milliseconds() >= 1000);
    }
}
