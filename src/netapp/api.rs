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

//! Foundation bits exposing the NetApp Files API.

use super::super::common::ResourceId;
use super::super::session::Session;
use super::super::{Error, ErrorKind, Result};
use super::protocol::*;

/// API version of the `Microsoft.NetApp` provider.
pub const NETAPP_API_VERSION: &str = "2019-11-01";

fn ensure_kind(id: &ResourceId, matches: bool, what: &str) -> Result<()> {
    if id.is_netapp_resource() && matches {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} is not a {} identifier", id, what),
        ))
    }
}

/// Create or update a NetApp account.
pub async fn create_account(
    session: &Session,
    id: &ResourceId,
    account: &NetAppAccount,
) -> Result<NetAppAccount> {
    ensure_kind(id, id.account_name().is_some() && id.pool_name().is_none(), "NetApp account")?;
    trace!("Creating NetApp account {}", id);
    let result: NetAppAccount = session
        .put_json(id.as_str(), NETAPP_API_VERSION, account)
        .await?;
    debug!("Created NetApp account {:?}", result.id);
    Ok(result)
}

/// Create or update a capacity pool.
pub async fn create_pool(
    session: &Session,
    id: &ResourceId,
    pool: &CapacityPool,
) -> Result<CapacityPool> {
    ensure_kind(id, id.pool_name().is_some() && id.volume_name().is_none(), "capacity pool")?;
    trace!("Creating capacity pool {}", id);
    let result: CapacityPool = session
        .put_json(id.as_str(), NETAPP_API_VERSION, pool)
        .await?;
    debug!("Created capacity pool {:?}", result.id);
    Ok(result)
}

/// Create or update a volume.
pub async fn create_volume(session: &Session, id: &ResourceId, volume: &Volume) -> Result<Volume> {
    ensure_kind(id, id.volume_name().is_some() && id.snapshot_name().is_none(), "volume")?;
    trace!("Creating volume {}", id);
    let result: Volume = session
        .put_json(id.as_str(), NETAPP_API_VERSION, volume)
        .await?;
    debug!("Created volume {:?}", result.id);
    Ok(result)
}

/// Get a NetApp account.
pub async fn get_account(session: &Session, id: &ResourceId) -> Result<NetAppAccount> {
    session.get_json(id.as_str(), NETAPP_API_VERSION).await
}

/// Get a capacity pool.
pub async fn get_pool(session: &Session, id: &ResourceId) -> Result<CapacityPool> {
    session.get_json(id.as_str(), NETAPP_API_VERSION).await
}

/// Get a volume.
pub async fn get_volume(session: &Session, id: &ResourceId) -> Result<Volume> {
    session.get_json(id.as_str(), NETAPP_API_VERSION).await
}

/// Delete any NetApp resource and wait for the operation to finish.
pub async fn delete_resource(session: &Session, id: &ResourceId) -> Result<()> {
    if !id.is_netapp_resource() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} is not a NetApp resource", id),
        ));
    }
    trace!("Deleting {}", id);
    session.delete(id.as_str(), NETAPP_API_VERSION).await?;
    debug!("Successfully deleted {}", id);
    Ok(())
}

/// Check whether a resource exists.
///
/// Works for any resource type given the matching API version.
pub async fn resource_exists(session: &Session, id: &ResourceId, api_version: &str) -> Result<bool> {
    trace!("Checking whether {} exists", id);
    match session
        .get_json::<serde_json::Value>(id.as_str(), api_version)
        .await
    {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::ResourceNotFound => {
            debug!("Resource {} does not exist", id);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
