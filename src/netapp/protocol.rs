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

//! JSON structures and protocol bits for the NetApp Files API.
//!
//! The same structures are used for requests and responses: read-only fields
//! are optional and skipped when serializing.

use std::collections::HashMap;
use std::fmt;

use super::super::common::ResourceId;

/// Performance tier of a capacity pool and its volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceLevel {
    /// Standard tier.
    Standard,
    /// Premium tier.
    Premium,
    /// Ultra tier.
    Ultra,
}

impl Default for ServiceLevel {
    fn default() -> ServiceLevel {
        ServiceLevel::Standard
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Premium => "Premium",
            ServiceLevel::Ultra => "Ultra",
        })
    }
}

/// Protocol a volume is exported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolType {
    /// NFS version 3.
    #[serde(rename = "NFSv3")]
    NfsV3,
    /// NFS version 4.1.
    #[serde(rename = "NFSv4.1")]
    NfsV41,
    /// SMB.
    #[serde(rename = "CIFS")]
    Cifs,
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProtocolType::NfsV3 => "NFSv3",
            ProtocolType::NfsV41 => "NFSv4.1",
            ProtocolType::Cifs => "CIFS",
        })
    }
}

/// Active Directory connection used to domain join the SMB server.
///
/// The password is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDirectory {
    /// ID assigned by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<String>,
    /// User allowed to join computers to the domain.
    pub username: String,
    /// Password of `username`, never returned by the provider.
    #[serde(default)]
    pub password: String,
    /// Fully qualified domain name.
    pub domain: String,
    /// Comma separated list of DNS server addresses.
    pub dns: String,
    /// Prefix of the SMB server name, the provider appends a random suffix.
    pub smb_server_name: String,
    /// Organizational unit for the computer account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<String>,
    /// Connection status reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Properties of a NetApp account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProperties {
    /// Provisioning state, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    /// Active Directory connections, at most one per subscription and region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_directories: Option<Vec<ActiveDirectory>>,
}

/// A NetApp account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetAppAccount {
    /// Fully qualified ID, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Account name, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, read-only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Region.
    pub location: String,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Account properties.
    #[serde(default)]
    pub properties: AccountProperties,
}

/// Properties of a capacity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolProperties {
    /// UUID of the pool, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// Provisioned size in bytes.
    pub size: u64,
    /// Service level.
    pub service_level: ServiceLevel,
    /// Provisioning state, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// A capacity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityPool {
    /// Fully qualified ID, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Relative name `account/pool`, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, read-only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Region, must match the account.
    pub location: String,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Pool properties.
    pub properties: PoolProperties,
}

/// A mount target of a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountTarget {
    /// IP address clients mount from.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// SMB server FQDN (SMB volumes only).
    #[serde(default)]
    pub smb_server_fqdn: Option<String>,
}

/// Properties of a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProperties {
    /// UUID of the file system, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    /// Unique file path (export or share name).
    pub creation_token: String,
    /// Service level, must match the capacity pool.
    pub service_level: ServiceLevel,
    /// Quota in bytes.
    pub usage_threshold: u64,
    /// ID of the delegated subnet.
    pub subnet_id: ResourceId,
    /// Protocols, only one is supported at a time.
    pub protocol_types: Vec<ProtocolType>,
    /// Mount targets, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_targets: Option<Vec<MountTarget>>,
    /// Provisioning state, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// A volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Fully qualified ID, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Relative name `account/pool/volume`, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, read-only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Region, must match the account.
    pub location: String,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Volume properties.
    pub properties: VolumeProperties,
}

impl fmt::Debug for ActiveDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveDirectory")
            .field("active_directory_id", &self.active_directory_id)
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .field("domain", &self.domain)
            .field("dns", &self.dns)
            .field("smb_server_name", &self.smb_server_name)
            .field("organizational_unit", &self.organizational_unit)
            .field("status", &self.status)
            .finish()
    }
}

impl ActiveDirectory {
    /// Create an Active Directory connection.
    pub fn new<S1, S2, S3, S4>(
        domain: S1,
        dns: &[S2],
        username: S3,
        password: S4,
        smb_server_name: &str,
    ) -> ActiveDirectory
    where
        S1: Into<String>,
        S2: AsRef<str>,
        S3: Into<String>,
        S4: Into<String>,
    {
        ActiveDirectory {
            active_directory_id: None,
            username: username.into(),
            password: password.into(),
            domain: domain.into(),
            dns: dns
                .iter()
                .map(|s| s.as_ref().trim())
                .collect::<Vec<_>>()
                .join(","),
            smb_server_name: smb_server_name.to_string(),
            organizational_unit: None,
            status: None,
        }
    }

    /// DNS servers as a list.
    pub fn dns_servers(&self) -> Vec<&str> {
        self.dns
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl NetAppAccount {
    /// Build an account creation request.
    pub fn new<S: Into<String>>(location: S) -> NetAppAccount {
        NetAppAccount {
            id: None,
            name: None,
            resource_type: None,
            location: location.into(),
            tags: None,
            properties: AccountProperties::default(),
        }
    }

    /// Add an Active Directory connection.
    pub fn with_active_directory(mut self, value: ActiveDirectory) -> NetAppAccount {
        self.properties
            .active_directories
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }
}

impl CapacityPool {
    /// Build a capacity pool creation request.
    pub fn new<S: Into<String>>(location: S, service_level: ServiceLevel, size: u64) -> CapacityPool {
        CapacityPool {
            id: None,
            name: None,
            resource_type: None,
            location: location.into(),
            tags: None,
            properties: PoolProperties {
                pool_id: None,
                size,
                service_level,
                provisioning_state: None,
            },
        }
    }
}

impl Volume {
    /// Build a volume creation request exported with the given protocol.
    pub fn new<S1, S2>(
        location: S1,
        creation_token: S2,
        service_level: ServiceLevel,
        usage_threshold: u64,
        subnet_id: ResourceId,
        protocol: ProtocolType,
    ) -> Volume
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Volume {
            id: None,
            name: None,
            resource_type: None,
            location: location.into(),
            tags: None,
            properties: VolumeProperties {
                file_system_id: None,
                creation_token: creation_token.into(),
                service_level,
                usage_threshold,
                subnet_id,
                protocol_types: vec![protocol],
                mount_targets: None,
                provisioning_state: None,
            },
        }
    }
}
