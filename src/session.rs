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

//! Session structure definition.
//!
//! The Session object serves as a wrapper around an HTTP(s) client, handling
//! authentication, building Resource Manager URLs and driving long-running
//! operations.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use super::auth::{AccessToken, ServicePrincipal};
use super::common::protocol::{GenericResource, OperationStatus};
use super::common::{OperationWaiter, Waiter};
use super::{Error, ErrorKind, Result};

/// Default delay between two polls of a long-running operation.
const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(5);

/// An authenticated Resource Manager session.
///
/// Cloning is cheap, the token cache is shared between clones.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    auth: Arc<ServicePrincipal>,
    endpoint: Url,
    token: Arc<RwLock<Option<AccessToken>>>,
    polling_interval: Duration,
}

impl Session {
    /// Create a new session with the given credentials.
    pub fn new(auth: ServicePrincipal) -> Result<Session> {
        let client = Client::builder()
            .user_agent(concat!("netappfiles/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Session::new_with_client(client, auth))
    }

    /// Create a new session with an existing HTTP client.
    pub fn new_with_client(client: Client, auth: ServicePrincipal) -> Session {
        let mut endpoint = auth.resource_manager().clone();
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Session {
            client,
            auth: Arc::new(auth),
            endpoint,
            token: Arc::new(RwLock::new(None)),
            polling_interval: DEFAULT_POLLING_INTERVAL,
        }
    }

    /// Change the default delay between polls of long-running operations.
    ///
    /// The provider may still request a different delay via `Retry-After`.
    pub fn set_polling_interval(&mut self, interval: Duration) {
        self.polling_interval = interval;
    }

    /// Default delay between polls of long-running operations.
    #[inline]
    pub fn polling_interval(&self) -> Duration {
        self.polling_interval
    }

    /// Subscription this session works with.
    #[inline]
    pub fn subscription_id(&self) -> &str {
        self.auth.subscription_id()
    }

    /// Build a URL for the given resource ID and API version.
    pub fn resource_url(&self, id: &str, api_version: &str) -> Result<Url> {
        let mut url = self.endpoint.join(id.trim_start_matches('/'))?;
        url.set_query(Some(&format!("api-version={}", api_version)));
        Ok(url)
    }

    async fn token(&self) -> Result<String> {
        {
            let cached = self.token.read().await;
            if let Some(ref token) = *cached {
                if !token.needs_refresh(Utc::now()) {
                    return Ok(token.value().to_string());
                }
            }
        }

        let mut cached = self.token.write().await;
        // Another clone may have refreshed the token while we waited.
        if let Some(ref token) = *cached {
            if !token.needs_refresh(Utc::now()) {
                return Ok(token.value().to_string());
            }
        }

        let token = self.auth.get_token(&self.client).await?;
        let value = token.value().to_string();
        *cached = Some(token);
        Ok(value)
    }

    /// Start an authenticated request.
    pub(crate) async fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.token().await?;
        Ok(self.client.request(method, url).bearer_auth(token))
    }

    /// Send a request, converting error responses into errors.
    pub(crate) async fn send_checked(&self, builder: RequestBuilder) -> Result<Response> {
        check_response(builder.send().await?).await
    }

    /// Fetch a JSON document from an arbitrary URL.
    pub(crate) async fn fetch_url<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let builder = self.request(Method::GET, url).await?;
        let resp = self.send_checked(builder).await?;
        Ok(resp.json().await?)
    }

    /// Fetch a resource by its ID.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, id: &str, api_version: &str) -> Result<T> {
        trace!("Fetching {}", id);
        let url = self.resource_url(id, api_version)?;
        self.fetch_url(url).await
    }

    /// Create or update a resource and wait for the operation to finish.
    ///
    /// Returns the resource as fetched after the operation has finished.
    pub(crate) async fn put_json<B, T>(&self, id: &str, api_version: &str, body: &B) -> Result<T>
    where
        B: Serialize + Debug + Sync,
        T: DeserializeOwned,
    {
        debug!("Creating or updating {} with {:?}", id, body);
        let url = self.resource_url(id, api_version)?;
        let builder = self.request(Method::PUT, url.clone()).await?.json(body);
        let resp = self.send_checked(builder).await?;
        OperationWaiter::new(self.clone(), &resp, url.clone(), id)?
            .wait()
            .await?;

        let value: serde_json::Value = self.fetch_url(url).await?;
        let resource: GenericResource = serde_json::from_value(value.clone())?;
        match resource.provisioning_state() {
            Some(OperationStatus::Failed) | Some(OperationStatus::Canceled) => Err(Error::new(
                ErrorKind::OperationFailed,
                format!("Resource {} ended up in a failed provisioning state", id),
            )),
            _ => {
                debug!("Resource {} is ready", id);
                Ok(serde_json::from_value(value)?)
            }
        }
    }

    /// Delete a resource and wait for the operation to finish.
    pub(crate) async fn delete(&self, id: &str, api_version: &str) -> Result<()> {
        debug!("Deleting {}", id);
        let url = self.resource_url(id, api_version)?;
        let builder = self.request(Method::DELETE, url.clone()).await?;
        let resp = self.send_checked(builder).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            debug!("Resource {} did not exist", id);
            return Ok(());
        }

        OperationWaiter::new_for_deletion(self.clone(), &resp, id)?
            .wait()
            .await?;
        debug!("Successfully deleted {}", id);
        Ok(())
    }
}

/// Convert an error response into an error.
pub(crate) async fn check_response(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let err = Error::from_response_body(status, &body);
    trace!("Request failed with HTTP {}: {}", status, err);
    Err(err)
}
