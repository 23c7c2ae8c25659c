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

//! Cloud API.

use std::time::Duration;

use static_assertions::assert_impl_all;

use super::auth::ServicePrincipal;
use super::common::{ResourceId, Waiter};
use super::netapp::{self, api, CapacityPool, NetAppAccount, ResourceHandle, Volume};
use super::session::Session;
use super::Result;

/// Azure management API.
///
/// Provides high-level API for NetApp Files resources and generic existence
/// checks of other resources (e.g. subnets).
#[derive(Debug, Clone)]
pub struct Cloud {
    session: Session,
}

assert_impl_all!(Cloud: Send, Sync);

impl Cloud {
    /// Create a new cloud object with the given credentials.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// fn cloud() -> netappfiles::Result<netappfiles::Cloud> {
    ///     let auth = netappfiles::auth::ServicePrincipal::new(
    ///         "tenant-id", "client-id", "secret", "subscription-id");
    ///     netappfiles::Cloud::new(auth)
    /// }
    ///
    /// # fn main() { cloud().unwrap(); }
    /// ```
    ///
    /// # See Also
    ///
    /// * [from_env](#method.from_env) to create a Cloud from `AZURE_AUTH_LOCATION`
    pub fn new(auth: ServicePrincipal) -> Result<Cloud> {
        Ok(Cloud {
            session: Session::new(auth)?,
        })
    }

    /// Create a new cloud object from the file referenced by `AZURE_AUTH_LOCATION`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # fn cloud_from_env() -> netappfiles::Result<()> {
    /// let cloud = netappfiles::Cloud::from_env()?;
    /// # Ok(()) }
    /// # fn main() { cloud_from_env().unwrap(); }
    /// ```
    pub fn from_env() -> Result<Cloud> {
        Cloud::new(ServicePrincipal::from_env()?)
    }

    /// Create a new cloud object from an existing session.
    pub fn new_with_session(session: Session) -> Cloud {
        Cloud { session }
    }

    /// Change the default delay between polls of long-running operations.
    pub fn with_polling_interval(mut self, interval: Duration) -> Cloud {
        self.session.set_polling_interval(interval);
        self
    }

    /// Session used by this cloud.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Subscription this cloud works with.
    #[inline]
    pub fn subscription_id(&self) -> &str {
        self.session.subscription_id()
    }

    /// Check whether any resource exists.
    pub async fn resource_exists(&self, id: &ResourceId, api_version: &str) -> Result<bool> {
        api::resource_exists(&self.session, id, api_version).await
    }

    /// Create a NetApp account and wait for it to be ready.
    pub async fn create_account(
        &self,
        id: &ResourceId,
        account: &NetAppAccount,
    ) -> Result<NetAppAccount> {
        api::create_account(&self.session, id, account).await
    }

    /// Create a capacity pool and wait for it to be ready.
    pub async fn create_pool(&self, id: &ResourceId, pool: &CapacityPool) -> Result<CapacityPool> {
        api::create_pool(&self.session, id, pool).await
    }

    /// Create a volume and wait for it to be ready.
    pub async fn create_volume(&self, id: &ResourceId, volume: &Volume) -> Result<Volume> {
        api::create_volume(&self.session, id, volume).await
    }

    /// Get a NetApp account.
    pub async fn get_account(&self, id: &ResourceId) -> Result<NetAppAccount> {
        api::get_account(&self.session, id).await
    }

    /// Get a capacity pool.
    pub async fn get_pool(&self, id: &ResourceId) -> Result<CapacityPool> {
        api::get_pool(&self.session, id).await
    }

    /// Get a volume.
    pub async fn get_volume(&self, id: &ResourceId) -> Result<Volume> {
        api::get_volume(&self.session, id).await
    }

    /// Delete a NetApp resource and wait for the operation to finish.
    pub async fn delete_resource(&self, id: &ResourceId) -> Result<()> {
        api::delete_resource(&self.session, id).await
    }

    /// Poll a NetApp resource until the provider stops returning it.
    ///
    /// Deletion may still propagate after the operation has finished, a
    /// parent cannot be deleted until then.
    pub async fn wait_for_no_resource(
        &self,
        id: &ResourceId,
        timeout: Duration,
        delay: Duration,
    ) -> Result<()> {
        ResourceHandle::new(self.session.clone(), id.clone(), netapp::NETAPP_API_VERSION)
            .wait_for_deletion(timeout, delay)
            .wait()
            .await
    }
}
