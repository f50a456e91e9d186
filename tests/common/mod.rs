/// Shared test doubles for shopdb integration tests
use shopdb::{Connector, DbError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const REACHABLE_URL: &str = "mongodb://127.0.0.1:27017/shop";
pub const UNREACHABLE_URL: &str = "mongodb://10.255.255.1:27017/shop";

/// Handle returned by [`FakeConnector`], numbered by attempt
#[derive(Debug, PartialEq, Eq)]
pub struct FakeHandle {
    pub attempt: usize,
    pub url: String,
}

/// Connector that succeeds for [`REACHABLE_URL`] and counts every attempt
pub struct FakeConnector {
    attempts: AtomicUsize,
    failures_before_success: usize,
    latency: Duration,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
            failures_before_success: 0,
            latency: Duration::from_millis(20),
        }
    }

    /// Fail the first `count` attempts even for a reachable address
    pub fn failing_first(count: usize) -> Self {
        Self {
            failures_before_success: count,
            ..Self::new()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Connector for FakeConnector {
    type Handle = FakeHandle;

    async fn connect(&self, url: &str) -> Result<FakeHandle, DbError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.latency).await;

        if url != REACHABLE_URL || attempt <= self.failures_before_success {
            return Err(DbError::ConnectionFailed {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(FakeHandle {
            attempt,
            url: url.to_string(),
        })
    }
}
