// Copyright 2026 The netappfiles developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Waiters.
//!
//! The `Waiter` trait follows `waiter::Waiter` from the `waiter` crate, but polls
//! asynchronously so that waiting does not block the runtime.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::super::{Error, ErrorKind, Result};
use super::Refresh;

/// Something that has to be polled until it reaches its final state.
#[async_trait]
pub trait Waiter: Send {
    /// Result of a successful wait.
    type Item: Send;

    /// Default timeout for this action, `None` means wait forever.
    fn default_wait_timeout(&self) -> Option<Duration>;

    /// Default delay between two retries.
    fn default_delay(&self) -> Duration;

    /// Error to return on timeout.
    fn timeout_error(&self) -> Error;

    /// Update the current state of the action.
    ///
    /// Returns `Some(..)` once the action is finished.
    async fn poll(&mut self) -> Result<Option<Self::Item>>;

    /// Wait for the default amount of time.
    async fn wait(self) -> Result<Self::Item>
    where
        Self: Sized,
    {
        let timeout = self.default_wait_timeout();
        self.wait_for(timeout).await
    }

    /// Wait for the given amount of time, `None` meaning forever.
    async fn wait_for(self, timeout: Option<Duration>) -> Result<Self::Item>
    where
        Self: Sized,
    {
        let mut this = self;
        let started = Instant::now();
        loop {
            if let Some(result) = this.poll().await? {
                return Ok(result);
            }

            let delay = this.default_delay();
            if let Some(limit) = timeout {
                if started.elapsed() + delay > limit {
                    return Err(this.timeout_error());
                }
            }

            tokio::time::sleep(delay).await;
        }
    }
}

/// Wait for resource deletion to propagate.
///
/// The resource is refreshed until the provider reports it as not found.
#[derive(Debug)]
pub struct DeletionWaiter<T> {
    inner: T,
    wait_timeout: Duration,
    delay: Duration,
}

impl<T> DeletionWaiter<T> {
    pub(crate) fn new(inner: T, wait_timeout: Duration, delay: Duration) -> DeletionWaiter<T> {
        DeletionWaiter {
            inner,
            wait_timeout,
            delay,
        }
    }

    /// The resource being waited on.
    pub fn current_state(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Refresh + Debug + Send> Waiter for DeletionWaiter<T> {
    type Item = ();

    fn default_wait_timeout(&self) -> Option<Duration> {
        Some(self.wait_timeout)
    }

    fn default_delay(&self) -> Duration {
        self.delay
    }

    fn timeout_error(&self) -> Error {
        Error::new(
            ErrorKind::OperationTimedOut,
            format!("Timeout waiting for resource {:?} to be deleted", self.inner),
        )
    }

    async fn poll(&mut self) -> Result<Option<()>> {
        match self.inner.refresh().await {
            Ok(..) => {
                trace!("Still waiting for resource {:?} to be deleted", self.inner);
                Ok(None)
            }
            Err(ref e) if e.kind() == ErrorKind::ResourceNotFound => {
                debug!("Resource {:?} was deleted", self.inner);
                Ok(Some(()))
            }
            Err(e) => {
                debug!("Failed to delete resource {:?} - {}", self.inner, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::super::super::{Error, ErrorKind, Result};
    use super::super::Refresh;
    use super::{DeletionWaiter, Waiter};

    #[derive(Debug)]
    struct Countdown {
        remaining: usize,
        refreshed: usize,
        fail_with: Option<ErrorKind>,
    }

    #[async_trait]
    impl Refresh for Countdown {
        async fn refresh(&mut self) -> Result<()> {
            self.refreshed += 1;
            if let Some(kind) = self.fail_with {
                return Err(Error::new(kind, "refresh failed"));
            }

            if self.remaining == 0 {
                Err(Error::new(ErrorKind::ResourceNotFound, "gone"))
            } else {
                self.remaining -= 1;
                Ok(())
            }
        }
    }

    fn countdown(remaining: usize, fail_with: Option<ErrorKind>) -> Countdown {
        Countdown {
            remaining,
            refreshed: 0,
            fail_with,
        }
    }

    #[tokio::test]
    async fn test_deletion_waiter_finishes_on_not_found() {
        let mut waiter = DeletionWaiter::new(
            countdown(2, None),
            Duration::from_secs(5),
            Duration::from_millis(1),
        );
        assert!(waiter.poll().await.unwrap().is_none());
        assert_eq!(waiter.current_state().refreshed, 1);

        waiter.wait().await.unwrap();
    }

    #[tokio::test]
    async fn test_deletion_waiter_propagates_errors() {
        let waiter = DeletionWaiter::new(
            countdown(2, Some(ErrorKind::AccessDenied)),
            Duration::from_secs(5),
            Duration::from_millis(1),
        );
        let err = waiter.wait().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
    }

    #[tokio::test]
    async fn test_deletion_waiter_times_out() {
        let waiter = DeletionWaiter::new(
            countdown(usize::MAX, None),
            Duration::from_millis(20),
            Duration::from_millis(5),
        );
        let err = waiter.wait().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationTimedOut);
    }
}
