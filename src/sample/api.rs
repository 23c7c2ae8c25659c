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

//! Provider operations used by the workflow.

use std::time::Duration;

use async_trait::async_trait;

use super::super::cloud::Cloud;
use super::super::common::ResourceId;
use super::super::netapp::{api, CapacityPool, NetAppAccount, Volume};
use super::super::{Error, ErrorKind, Result};

/// How long to wait for a deletion to propagate.
pub const PROPAGATION_TIMEOUT: Duration = Duration::from_secs(600);

/// Delay between checks whether a deletion has propagated.
pub const PROPAGATION_DELAY: Duration = Duration::from_secs(10);

/// Operations the provisioning workflow needs from the provider.
///
/// Every create and delete call returns once the long-running operation has
/// finished.
#[async_trait]
pub trait ProvisioningApi: Send + Sync {
    /// Subscription all resources live in.
    fn subscription_id(&self) -> &str;

    /// Whether any resource exists (`false` on HTTP 404).
    async fn resource_exists(&self, id: &ResourceId, api_version: &str) -> Result<bool>;

    /// Create a NetApp account.
    async fn create_account(&self, id: &ResourceId, account: &NetAppAccount)
        -> Result<NetAppAccount>;

    /// Create a capacity pool.
    async fn create_pool(&self, id: &ResourceId, pool: &CapacityPool) -> Result<CapacityPool>;

    /// Create a volume.
    async fn create_volume(&self, id: &ResourceId, volume: &Volume) -> Result<Volume>;

    /// Delete a volume.
    async fn delete_volume(&self, id: &ResourceId) -> Result<()>;

    /// Delete a capacity pool.
    async fn delete_pool(&self, id: &ResourceId) -> Result<()>;

    /// Delete a NetApp account.
    async fn delete_account(&self, id: &ResourceId) -> Result<()>;

    /// Wait until the provider stops returning a deleted resource.
    async fn wait_for_no_resource(&self, id: &ResourceId) -> Result<()>;
}

fn expect_kind(id: &ResourceId, matches: bool, what: &str) -> Result<()> {
    if matches {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("Refusing to delete {}: not a {}", id, what),
        ))
    }
}

#[async_trait]
impl ProvisioningApi for Cloud {
    fn subscription_id(&self) -> &str {
        self.session().subscription_id()
    }

    async fn resource_exists(&self, id: &ResourceId, api_version: &str) -> Result<bool> {
        api::resource_exists(self.session(), id, api_version).await
    }

    async fn create_account(
        &self,
        id: &ResourceId,
        account: &NetAppAccount,
    ) -> Result<NetAppAccount> {
        api::create_account(self.session(), id, account).await
    }

    async fn create_pool(&self, id: &ResourceId, pool: &CapacityPool) -> Result<CapacityPool> {
        api::create_pool(self.session(), id, pool).await
    }

    async fn create_volume(&self, id: &ResourceId, volume: &Volume) -> Result<Volume> {
        api::create_volume(self.session(), id, volume).await
    }

    async fn delete_volume(&self, id: &ResourceId) -> Result<()> {
        expect_kind(id, id.volume_name().is_some(), "volume")?;
        api::delete_resource(self.session(), id).await
    }

    async fn delete_pool(&self, id: &ResourceId) -> Result<()> {
        expect_kind(
            id,
            id.pool_name().is_some() && id.volume_name().is_none(),
            "capacity pool",
        )?;
        api::delete_resource(self.session(), id).await
    }

    async fn delete_account(&self, id: &ResourceId) -> Result<()> {
        expect_kind(
            id,
            id.account_name().is_some() && id.pool_name().is_none(),
            "NetApp account",
        )?;
        api::delete_resource(self.session(), id).await
    }

    async fn wait_for_no_resource(&self, id: &ResourceId) -> Result<()> {
        Cloud::wait_for_no_resource(self, id, PROPAGATION_TIMEOUT, PROPAGATION_DELAY).await
    }
}
