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

//! Fully qualified resource identifiers.
//!
//! Resource Manager identifies everything with a hierarchical path:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.NetApp
//!     /netAppAccounts/{account}/capacityPools/{pool}/volumes/{volume}
//! ```
//!
//! Most operations only need the leaf names, which this module extracts.

use std::fmt;
use std::str::FromStr;

use super::super::{Error, ErrorKind, Result};

/// Resource provider namespace of NetApp resources.
pub const NETAPP_PROVIDER: &str = "Microsoft.NetApp";

const SUBSCRIPTIONS: &str = "subscriptions";
const RESOURCE_GROUPS: &str = "resourceGroups";
const PROVIDERS: &str = "providers";
const ACCOUNTS: &str = "netAppAccounts";
const POOLS: &str = "capacityPools";
const VOLUMES: &str = "volumes";
const SNAPSHOTS: &str = "snapshots";

/// A fully qualified resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Parse and validate a resource identifier.
    ///
    /// The identifier must start with `/subscriptions/{id}` and consist of
    /// non-empty segments.
    pub fn parse<S: Into<String>>(value: S) -> Result<ResourceId> {
        let value = value.into();
        let trimmed = value.trim_end_matches('/');
        if !trimmed.starts_with('/') {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Resource ID {} is not an absolute path", value),
            ));
        }

        let segments: Vec<&str> = trimmed[1..].split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Resource ID {} contains empty segments", value),
            ));
        }

        if segments.len() < 2 || !segments[0].eq_ignore_ascii_case(SUBSCRIPTIONS) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Resource ID {} does not start with a subscription", value),
            ));
        }

        Ok(ResourceId(trimmed.to_string()))
    }

    /// Identifier of a virtual network subnet.
    pub fn subnet(subscription: &str, resource_group: &str, vnet: &str, subnet: &str) -> ResourceId {
        ResourceId(format!(
            "/{}/{}/{}/{}/{}/Microsoft.Network/virtualNetworks/{}/subnets/{}",
            SUBSCRIPTIONS, subscription, RESOURCE_GROUPS, resource_group, PROVIDERS, vnet, subnet
        ))
    }

    /// Identifier of a NetApp account.
    pub fn netapp_account(subscription: &str, resource_group: &str, account: &str) -> ResourceId {
        ResourceId(format!(
            "/{}/{}/{}/{}/{}/{}/{}/{}",
            SUBSCRIPTIONS,
            subscription,
            RESOURCE_GROUPS,
            resource_group,
            PROVIDERS,
            NETAPP_PROVIDER,
            ACCOUNTS,
            account
        ))
    }

    /// Identifier of a capacity pool.
    pub fn capacity_pool(
        subscription: &str,
        resource_group: &str,
        account: &str,
        pool: &str,
    ) -> ResourceId {
        ResourceId::netapp_account(subscription, resource_group, account).child(POOLS, pool)
    }

    /// Identifier of a volume.
    pub fn volume(
        subscription: &str,
        resource_group: &str,
        account: &str,
        pool: &str,
        volume: &str,
    ) -> ResourceId {
        ResourceId::capacity_pool(subscription, resource_group, account, pool).child(VOLUMES, volume)
    }

    /// Identifier of a child resource.
    pub fn child(&self, resource_type: &str, name: &str) -> ResourceId {
        ResourceId(format!("{}/{}/{}", self.0, resource_type, name))
    }

    /// Identifier of a capacity pool inside this NetApp account.
    pub fn child_pool(&self, pool: &str) -> ResourceId {
        self.child(POOLS, pool)
    }

    /// Identifier of a volume inside this capacity pool.
    pub fn child_volume(&self, volume: &str) -> ResourceId {
        self.child(VOLUMES, volume)
    }

    /// Identifier of the parent resource, if any.
    ///
    /// The parent of a top-level provider resource is its resource group and
    /// the parent of a resource group is its subscription.
    pub fn parent(&self) -> Option<ResourceId> {
        let segments = self.segments();
        let keep = match segments.len() {
            0..=2 => return None,
            4 => 2,
            n if n >= 6 && segments[4].eq_ignore_ascii_case(PROVIDERS) && n <= 8 => 4,
            n => n - 2,
        };
        Some(ResourceId(format!("/{}", segments[..keep].join("/"))))
    }

    /// Whether this identifier is a descendant of `other`.
    pub fn is_child_of(&self, other: &ResourceId) -> bool {
        let prefix = other.as_ref().to_lowercase();
        let own = self.0.to_lowercase();
        own.len() > prefix.len() && own.starts_with(&prefix) && own[prefix.len()..].starts_with('/')
    }

    /// Value following the given key, matched case-insensitively.
    ///
    /// For example, `value_of("resourceGroups")` returns the resource group.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        let mut segments = self.0[1..].split('/');
        while let Some(segment) = segments.next() {
            if segment.eq_ignore_ascii_case(key) {
                return segments.next();
            }
        }
        None
    }

    /// Subscription ID.
    pub fn subscription(&self) -> &str {
        self.value_of(SUBSCRIPTIONS).unwrap_or_default()
    }

    /// Resource group name (if any).
    pub fn resource_group(&self) -> Option<&str> {
        self.value_of(RESOURCE_GROUPS)
    }

    /// Resource provider namespace (if any).
    pub fn provider(&self) -> Option<&str> {
        self.value_of(PROVIDERS)
    }

    /// Leaf name of the resource.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Whether this is a NetApp resource.
    pub fn is_netapp_resource(&self) -> bool {
        self.provider()
            .map(|p| p.eq_ignore_ascii_case(NETAPP_PROVIDER))
            .unwrap_or(false)
    }

    /// NetApp account name (if any).
    pub fn account_name(&self) -> Option<&str> {
        self.value_of(ACCOUNTS)
    }

    /// Capacity pool name (if any).
    pub fn pool_name(&self) -> Option<&str> {
        self.value_of(POOLS)
    }

    /// Volume name (if any).
    pub fn volume_name(&self) -> Option<&str> {
        self.value_of(VOLUMES)
    }

    /// Snapshot name (if any).
    pub fn snapshot_name(&self) -> Option<&str> {
        self.value_of(SNAPSHOTS)
    }

    /// The identifier as a path.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> Vec<&str> {
        self.0[1..].split('/').collect()
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<ResourceId> {
        ResourceId::parse(s)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = Error;

    fn try_from(value: String) -> Result<ResourceId> {
        ResourceId::parse(value)
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> String {
        value.0
    }
}
