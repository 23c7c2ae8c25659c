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

//! Runs against a real subscription.
//!
//! Requires `AZURE_AUTH_LOCATION`, a delegated subnet matching the sample
//! configuration (see `ANF_SAMPLE_CONFIG`) and `ANF_DOMAIN_JOIN_PASSWORD`.
//! Run with `cargo test -- --ignored`.

use std::env;
use std::sync::Once;

use netappfiles::sample::{self, Console, SampleConfig};
use netappfiles::{ErrorKind, ResourceId};

static INIT: Once = Once::new();

fn set_up() -> netappfiles::Cloud {
    INIT.call_once(|| {
        env_logger::init();
    });

    netappfiles::Cloud::from_env()
        .expect("Failed to create a service principal from the environment")
}

#[tokio::test]
#[ignore]
async fn test_subnet_lookup() {
    let cloud = set_up();
    let config = SampleConfig::from_env().expect("Invalid sample configuration");

    let subnet = config.subnet_id(cloud.subscription_id());
    let exists = cloud
        .resource_exists(&subnet, &config.subnet_api_version)
        .await
        .expect("Cannot check the subnet");
    assert!(exists, "Subnet {} does not exist", subnet);

    let missing = ResourceId::subnet(
        cloud.subscription_id(),
        &config.vnet_resource_group,
        &config.vnet_name,
        "definitely-not-there",
    );
    let exists = cloud
        .resource_exists(&missing, &config.subnet_api_version)
        .await
        .expect("Cannot check the subnet");
    assert!(!exists);
}

#[tokio::test]
#[ignore]
async fn test_create_and_clean_up_smb_volume() {
    let cloud = set_up();
    let config = SampleConfig::from_env().expect("Invalid sample configuration");
    let password = env::var("ANF_DOMAIN_JOIN_PASSWORD").expect("ANF_DOMAIN_JOIN_PASSWORD is not set");

    let mut console = Console::stdout();
    let created = sample::run(&cloud, &config, &password, false, &mut console)
        .await
        .expect("Provisioning failed");
    assert!(created.pool_id.is_child_of(&created.account_id));
    assert!(created.volume_ids[0].is_child_of(&created.pool_id));

    let volume = cloud
        .get_volume(&created.volume_ids[0])
        .await
        .expect("Cannot fetch the volume");
    assert_eq!(volume.properties.service_level, created.pool.properties.service_level);

    sample::cleanup(&cloud, &created, &mut console)
        .await
        .expect("Cleanup failed");

    let err = cloud.get_account(&created.account_id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}
