// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Poll a resource until it reaches a terminal state.
//!
//! Most long-running operations in these snippets use the typed pollers
//! returned by `.poller()`. Some services (Compute Engine zone operations,
//! Workflows executions, Batch jobs, Vertex AI batch prediction jobs, BigQuery
//! query jobs) report progress through a status field on a regular resource
//! instead. The snippets for those services fetch the resource repeatedly,
//! sleeping between attempts, until the status is terminal.
//!
//! # Example
//! ```
//! # use cloud_snippets::poll::{PollingPolicy, Terminal, until_terminal};
//! # use std::time::Duration;
//! struct Job { done: bool }
//! impl Terminal for Job {
//!     fn is_terminal(&self) -> bool { self.done }
//! }
//! async fn wait(initial: Job) -> cloud_snippets::poll::Result<Job> {
//!     let policy = PollingPolicy::fixed(Duration::from_millis(10));
//!     until_terminal(&policy, initial, || async {
//!         Ok::<_, google_cloud_gax::error::Error>(Job { done: true })
//!     })
//!     .await
//! }
//! ```

use std::future::Future;
use std::time::Duration;

/// The result type for [until_terminal].
pub type Result<T> = std::result::Result<T, PollError>;

/// Implemented by resources that report their own progress.
pub trait Terminal {
    /// Returns true if no further polling can change the resource state.
    fn is_terminal(&self) -> bool;
}

/// Errors returned by [until_terminal].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PollError {
    /// The attempt limit was reached before the resource was terminal.
    #[error("the resource did not reach a terminal state after {0} polling attempts")]
    Exhausted(u32),
    /// Querying the resource state failed.
    #[error("cannot query the resource state")]
    Query(#[source] google_cloud_gax::error::Error),
}

/// Controls how long to sleep between polling attempts, and how many attempts
/// to make.
#[derive(Clone, Debug, PartialEq)]
pub struct PollingPolicy {
    initial_delay: Duration,
    maximum_delay: Duration,
    doubling: bool,
    attempt_limit: Option<u32>,
}

impl PollingPolicy {
    /// Sleep for the same `delay` between all attempts.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            maximum_delay: delay,
            doubling: false,
            attempt_limit: None,
        }
    }

    /// Start with `initial` and double the delay after each attempt, up to
    /// `maximum`.
    pub fn doubling(initial: Duration, maximum: Duration) -> Self {
        Self {
            initial_delay: initial,
            maximum_delay: maximum.max(initial),
            doubling: true,
            attempt_limit: None,
        }
    }

    /// Give up after `limit` polling attempts.
    pub fn with_attempt_limit(mut self, limit: u32) -> Self {
        self.attempt_limit = Some(limit);
        self
    }

    pub fn attempt_limit(&self) -> Option<u32> {
        self.attempt_limit
    }

    /// The delay before polling `attempt`, counting from 1.
    pub fn delay(&self, attempt: u32) -> Duration {
        if !self.doubling {
            return self.initial_delay;
        }
        let exponent = attempt.saturating_sub(1);
        2_u32
            .checked_pow(exponent)
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .map_or(self.maximum_delay, |d| d.min(self.maximum_delay))
    }
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self::doubling(Duration::from_secs(1), Duration::from_secs(30))
    }
}

/// Calls `query` until it returns a terminal value.
///
/// Returns `initial` immediately if it is already terminal. Otherwise sleeps
/// according to `policy` before each call to `query`.
pub async fn until_terminal<T, F, Fut>(
    policy: &PollingPolicy,
    initial: T,
    mut query: F,
) -> Result<T>
where
    T: Terminal,
    F: FnMut() -> Fut,
    Fut: Future<Output = google_cloud_gax::Result<T>>,
{
    let mut current = initial;
    let mut attempt = 0_u32;
    while !current.is_terminal() {
        if policy.attempt_limit.is_some_and(|limit| attempt >= limit) {
            tracing::warn!("giving up after {attempt} polling attempts");
            return Err(PollError::Exhausted(attempt));
        }
        attempt += 1;
        let delay = policy.delay(attempt);
        tracing::debug!("polling attempt {attempt} in {delay:?}");
        tokio::time::sleep(delay).await;
        current = query().await.map_err(PollError::Query)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::error::Error;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use tokio::time::Instant;

    #[derive(Debug, PartialEq)]
    struct Fake(u32);

    impl Terminal for Fake {
        fn is_terminal(&self) -> bool {
            self.0 >= 3
        }
    }

    fn counter() -> impl FnMut() -> std::future::Ready<google_cloud_gax::Result<Fake>> {
        let mut count = 0;
        move || {
            count += 1;
            std::future::ready(Ok(Fake(count)))
        }
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(100)]
    fn fixed(attempt: u32) {
        let policy = PollingPolicy::fixed(Duration::from_secs(5));
        assert_eq!(policy.delay(attempt), Duration::from_secs(5));
    }

    #[test_case(1, 1)]
    #[test_case(2, 2)]
    #[test_case(3, 4)]
    #[test_case(4, 8)]
    #[test_case(5, 10)]
    #[test_case(64, 10)]
    #[test_case(u32::MAX, 10)]
    fn doubling(attempt: u32, want: u64) {
        let policy = PollingPolicy::doubling(Duration::from_secs(1), Duration::from_secs(10));
        assert_eq!(policy.delay(attempt), Duration::from_secs(want));
    }

    #[test]
    fn doubling_maximum_below_initial() {
        let policy = PollingPolicy::doubling(Duration::from_secs(4), Duration::from_secs(1));
        assert_eq!(policy.delay(1), Duration::from_secs(4));
        assert_eq!(policy.delay(2), Duration::from_secs(4));
    }

    #[test]
    fn defaults() {
        let policy = PollingPolicy::default();
        assert_eq!(policy.attempt_limit(), None);
        assert_eq!(policy.delay(1), Duration::from_secs(1));
        assert_eq!(policy.delay(20), Duration::from_secs(30));
        let policy = policy.with_attempt_limit(7);
        assert_eq!(policy.attempt_limit(), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_initial_value() -> anyhow::Result<()> {
        let start = Instant::now();
        let policy = PollingPolicy::fixed(Duration::from_secs(5));
        let got = until_terminal(
            &policy,
            Fake(10),
            || -> std::future::Ready<google_cloud_gax::Result<Fake>> {
                panic!("query should not be called for terminal values")
            },
        )
        .await?;
        assert_eq!(got, Fake(10));
        assert_eq!(start.elapsed(), Duration::ZERO);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_sleeps() -> anyhow::Result<()> {
        let start = Instant::now();
        let policy = PollingPolicy::fixed(Duration::from_secs(5));
        let got = until_terminal(&policy, Fake(0), counter()).await?;
        assert_eq!(got, Fake(3));
        assert_eq!(start.elapsed(), Duration::from_secs(15));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn doubling_sleeps() -> anyhow::Result<()> {
        let start = Instant::now();
        let policy = PollingPolicy::doubling(Duration::from_secs(1), Duration::from_secs(60));
        let got = until_terminal(&policy, Fake(0), counter()).await?;
        assert_eq!(got, Fake(3));
        // 1s + 2s + 4s
        assert_eq!(start.elapsed(), Duration::from_secs(7));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted() {
        let policy = PollingPolicy::fixed(Duration::from_secs(1)).with_attempt_limit(2);
        let got = until_terminal(&policy, Fake(0), counter()).await;
        assert!(matches!(got, Err(PollError::Exhausted(2))), "{got:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn limit_is_enough() -> anyhow::Result<()> {
        let policy = PollingPolicy::fixed(Duration::from_secs(1)).with_attempt_limit(3);
        let got = until_terminal(&policy, Fake(0), counter()).await?;
        assert_eq!(got, Fake(3));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn query_error() {
        let policy = PollingPolicy::default();
        let mut responses = vec![Ok(Fake(1)), Err(Error::io("fail")), Ok(Fake(3))].into_iter();
        let got = until_terminal(&policy, Fake(0), || {
            let next = responses.next().expect("query called too many times");
            async move { next }
        })
        .await;
        assert!(matches!(got, Err(PollError::Query(_))), "{got:?}");
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn error_messages() {
        let got = PollError::Exhausted(5).to_string();
        assert!(got.contains("5 polling attempts"), "{got}");
        let got = PollError::Query(Error::io("fail"));
        assert!(std::error::Error::source(&got).is_some(), "{got:?}");
    }
}
