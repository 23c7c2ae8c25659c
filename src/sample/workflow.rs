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

//! SMB volume provisioning workflow.

use std::io::Write;

use super::super::common::ResourceId;
use super::super::netapp::{CapacityPool, NetAppAccount, ProtocolType, Volume};
use super::super::{Error, ErrorKind, Result};
use super::api::ProvisioningApi;
use super::config::SampleConfig;
use super::console::Console;

/// Resources created by a run of the workflow.
#[derive(Debug, Clone)]
pub struct ProvisionedResources {
    /// NetApp account ID.
    pub account_id: ResourceId,
    /// Capacity pool ID.
    pub pool_id: ResourceId,
    /// Volume IDs.
    pub volume_ids: Vec<ResourceId>,
    /// The account as returned by the provider.
    pub account: NetAppAccount,
    /// The capacity pool as returned by the provider.
    pub pool: CapacityPool,
    /// The volumes as returned by the provider.
    pub volumes: Vec<Volume>,
}

fn report<T, W: Write>(console: &mut Console<W>, result: Result<T>) -> Result<T> {
    result.map_err(|err| {
        console.output(&format!("An error ocurred. Error details: {}", err));
        err
    })
}

/// Reject an empty Active Directory password.
///
/// Called by `run`, and by callers that want to fail before loading any
/// credentials.
pub fn check_password<W: Write>(password: &str, console: &mut Console<W>) -> Result<()> {
    if password.is_empty() {
        console.output("An error ocurred. Password cannot be empty string");
        Err(Error::new(
            ErrorKind::InvalidInput,
            "Password cannot be empty string",
        ))
    } else {
        Ok(())
    }
}

/// Provision a NetApp account, a capacity pool and an SMB volume.
///
/// The password joins the SMB server to the Active Directory domain. When
/// `cleanup` is true, everything is deleted again at the end.
///
/// Every failure is printed to the console and returned, nothing created
/// before the failure is rolled back.
pub async fn run<A, W>(
    api: &A,
    config: &SampleConfig,
    password: &str,
    cleanup: bool,
    console: &mut Console<W>,
) -> Result<ProvisionedResources>
where
    A: ProvisioningApi + ?Sized,
    W: Write,
{
    check_password(password, console)?;
    report(console, config.validate())?;

    let subscription = api.subscription_id().to_string();
    let subnet_id = config.subnet_id(&subscription);
    let subnet_exists = report(
        console,
        api.resource_exists(&subnet_id, &config.subnet_api_version).await,
    )?;
    if !subnet_exists {
        console.output(&format!("ERROR: Subnet with id {} not found", subnet_id));
        return Err(Error::new(
            ErrorKind::ResourceNotFound,
            format!("Subnet not found error. Subnet Id {}", subnet_id),
        ));
    }

    console.output("Creating Azure NetApp Files account ...");
    let account_id = config.account_id(&subscription);
    let body = NetAppAccount::new(config.location.as_str())
        .with_active_directory(config.active_directory(password));
    let account = report(console, api.create_account(&account_id, &body).await)?;
    let account_id = account.id.clone().unwrap_or(account_id);
    console.output(&format!(
        "\tAccount successfully created, resource id: {}",
        account_id
    ));

    console.output("Creating Capacity Pool ...");
    let pool_id = account_id.child_pool(&config.pool_name);
    let body = CapacityPool::new(
        config.location.as_str(),
        config.service_level,
        config.pool_size,
    );
    let pool = report(console, api.create_pool(&pool_id, &body).await)?;
    let pool_id = pool.id.clone().unwrap_or(pool_id);
    console.output(&format!(
        "\tCapacity Pool successfully created, resource id: {}",
        pool_id
    ));

    console.output("Creating a Volume ...");
    let volume_name = config.volume_name();
    let volume_id = pool_id.child_volume(&volume_name);
    let body = Volume::new(
        config.location.as_str(),
        volume_name.as_str(),
        pool.properties.service_level,
        config.volume_size,
        subnet_id,
        ProtocolType::Cifs,
    );
    let volume = report(console, api.create_volume(&volume_id, &body).await)?;
    let volume_id = volume.id.clone().unwrap_or(volume_id);
    console.output(&format!(
        "\tVolume successfully created, resource id: {}",
        volume_id
    ));

    let resources = ProvisionedResources {
        account_id,
        pool_id,
        volume_ids: vec![volume_id],
        account,
        pool,
        volumes: vec![volume],
    };

    if cleanup {
        self::cleanup(api, &resources, console).await?;
    }

    Ok(resources)
}

/// Delete provisioned resources, innermost first.
///
/// Each deletion is followed by a wait for it to propagate, since a parent
/// cannot be deleted while the provider still reports its children.
pub async fn cleanup<A, W>(
    api: &A,
    resources: &ProvisionedResources,
    console: &mut Console<W>,
) -> Result<()>
where
    A: ProvisioningApi + ?Sized,
    W: Write,
{
    console.output("Cleaning up...");

    console.output("\tDeleting Volumes...");
    for volume_id in &resources.volume_ids {
        console.output(&format!("\t\tDeleting {}", volume_id));
        report(console, api.delete_volume(volume_id).await)?;
        report(console, api.wait_for_no_resource(volume_id).await)?;
        console.output(&format!("\t\tDeleted Volume: {}", volume_id));
    }

    let pool_id = &resources.pool_id;
    console.output(&format!("\tDeleting Capacity Pool {} ...", pool_id.name()));
    report(console, api.delete_pool(pool_id).await)?;
    report(console, api.wait_for_no_resource(pool_id).await)?;
    console.output(&format!("\t\tDeleted Capacity Pool: {}", pool_id));

    let account_id = &resources.account_id;
    console.output(&format!("\tDeleting Account {} ...", account_id.name()));
    report(console, api.delete_account(account_id).await)?;
    report(console, api.wait_for_no_resource(account_id).await)?;
    console.output(&format!("\t\tDeleted Account: {}", account_id));

    Ok(())
}
