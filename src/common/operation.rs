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

//! Long-running operations.
//!
//! Resource Manager answers mutating requests before the work is done and
//! points at a URL to poll, either via `Azure-AsyncOperation` (a status
//! document) or via `Location` (202 until finished).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};
use reqwest::{Method, Response, StatusCode, Url};

use super::super::session::{check_response, Session};
use super::super::error::CloudErrorBody;
use super::super::{Error, ErrorKind, Result};
use super::protocol::{AsyncOperation, GenericResource, OperationStatus};
use super::Waiter;

const ASYNC_OPERATION: &str = "azure-asyncoperation";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PollTarget {
    AsyncOperation(Url),
    Location(Url),
    ProvisioningState(Url),
    Done,
}

/// Waiter for a long-running operation.
#[derive(Debug)]
pub(crate) struct OperationWaiter {
    session: Session,
    target: PollTarget,
    delay: Duration,
    resource: String,
}

fn header_url(headers: &HeaderMap, name: &str) -> Result<Option<Url>> {
    match headers.get(name) {
        Some(value) => Ok(Some(Url::parse(value.to_str()?)?)),
        None => Ok(None),
    }
}

/// Delay requested by the provider, zero is ignored to avoid busy polling.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

fn select_target(
    status: StatusCode,
    headers: &HeaderMap,
    resource_url: Option<Url>,
) -> Result<PollTarget> {
    if let Some(url) = header_url(headers, ASYNC_OPERATION)? {
        return Ok(PollTarget::AsyncOperation(url));
    }

    if status == StatusCode::ACCEPTED {
        if let Some(url) = header_url(headers, LOCATION.as_str())? {
            return Ok(PollTarget::Location(url));
        }
    }

    match resource_url {
        Some(url) => Ok(PollTarget::ProvisioningState(url)),
        None => Ok(PollTarget::Done),
    }
}

impl OperationWaiter {
    /// Waiter for a create or update request.
    ///
    /// Without polling headers the resource itself is polled until its
    /// provisioning state becomes final.
    pub(crate) fn new(
        session: Session,
        response: &Response,
        resource_url: Url,
        resource: &str,
    ) -> Result<OperationWaiter> {
        let target = select_target(response.status(), response.headers(), Some(resource_url))?;
        Ok(OperationWaiter::with_target(session, target, response.headers(), resource))
    }

    /// Waiter for a delete request.
    pub(crate) fn new_for_deletion(
        session: Session,
        response: &Response,
        resource: &str,
    ) -> Result<OperationWaiter> {
        let target = select_target(response.status(), response.headers(), None)?;
        Ok(OperationWaiter::with_target(session, target, response.headers(), resource))
    }

    fn with_target(
        session: Session,
        target: PollTarget,
        headers: &HeaderMap,
        resource: &str,
    ) -> OperationWaiter {
        trace!("Tracking operation on {} via {:?}", resource, target);
        let delay = retry_after(headers).unwrap_or_else(|| session.polling_interval());
        OperationWaiter {
            session,
            target,
            delay,
            resource: resource.to_string(),
        }
    }

    fn finish(&self, status: OperationStatus, error: Option<CloudErrorBody>) -> Result<Option<()>> {
        match status {
            OperationStatus::Succeeded => {
                debug!("Operation on {} succeeded", self.resource);
                Ok(Some(()))
            }
            OperationStatus::Failed => {
                debug!("Operation on {} failed", self.resource);
                Err(Error::from_cloud_error(ErrorKind::OperationFailed, error))
            }
            OperationStatus::Canceled => Err(Error::new(
                ErrorKind::OperationFailed,
                format!("Operation on {} was canceled", self.resource),
            )),
            OperationStatus::InProgress(state) => {
                trace!("Operation on {} is still {}", self.resource, state);
                Ok(None)
            }
        }
    }

    async fn get(&self, url: &Url) -> Result<Response> {
        let builder = self.session.request(Method::GET, url.clone()).await?;
        Ok(builder.send().await?)
    }
}

#[async_trait]
impl Waiter for OperationWaiter {
    type Item = ();

    fn default_wait_timeout(&self) -> Option<Duration> {
        None
    }

    fn default_delay(&self) -> Duration {
        self.delay
    }

    fn timeout_error(&self) -> Error {
        Error::new(
            ErrorKind::OperationTimedOut,
            format!("Timeout waiting for operation on {}", self.resource),
        )
    }

    async fn poll(&mut self) -> Result<Option<()>> {
        let target = self.target.clone();
        match target {
            PollTarget::Done => Ok(Some(())),
            PollTarget::AsyncOperation(url) => {
                let resp = check_response(self.get(&url).await?).await?;
                if let Some(delay) = retry_after(resp.headers()) {
                    self.delay = delay;
                }
                let op: AsyncOperation = resp.json().await?;
                self.finish(OperationStatus::parse(&op.status), op.error)
            }
            PollTarget::Location(url) => {
                let resp = check_response(self.get(&url).await?).await?;
                if resp.status() == StatusCode::ACCEPTED {
                    if let Some(delay) = retry_after(resp.headers()) {
                        self.delay = delay;
                    }
                    trace!("Operation on {} is still in progress", self.resource);
                    Ok(None)
                } else {
                    debug!("Operation on {} finished", self.resource);
                    Ok(Some(()))
                }
            }
            PollTarget::ProvisioningState(url) => {
                let resp = check_response(self.get(&url).await?).await?;
                let resource: GenericResource = resp.json().await?;
                match resource.provisioning_state() {
                    Some(status) => self.finish(status, None),
                    None => Ok(Some(())),
                }
            }
        }
    }
}
