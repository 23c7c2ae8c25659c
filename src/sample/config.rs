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

//! Parameters of the provisioning workflow.
//!
//! Every parameter has a default, a YAML file can override any of them:
//!
//! ```yaml
//! location: westeurope
//! resource_group: anf02-rg
//! pool_name: Pool02
//! service_level: Premium
//! should_cleanup: true
//! ```

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::super::common::ResourceId;
use super::super::netapp::{self, ActiveDirectory, ServiceLevel};
use super::super::{Error, ErrorKind, Result};
use super::names;

/// Environment variable holding the path to the sample configuration.
pub const SAMPLE_CONFIG_ENV: &str = "ANF_SAMPLE_CONFIG";

/// Parameters of the SMB volume provisioning workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// Region of all NetApp resources.
    pub location: String,
    /// Resource group of the NetApp resources.
    pub resource_group: String,
    /// Resource group of the virtual network.
    pub vnet_resource_group: String,
    /// Virtual network name.
    pub vnet_name: String,
    /// Name of the subnet delegated to NetApp Files.
    pub subnet_name: String,
    /// API version used to look up the subnet.
    pub subnet_api_version: String,
    /// NetApp account name, random by default.
    pub account_name: String,
    /// Capacity pool name.
    pub pool_name: String,
    /// Service level of the capacity pool (and thus the volume).
    pub service_level: ServiceLevel,
    /// Capacity pool size in bytes.
    pub pool_size: u64,
    /// Volume name, `Vol-{account}-{pool}` by default.
    pub volume_name: Option<String>,
    /// Volume quota in bytes.
    pub volume_size: u64,
    /// User that joins the SMB server to the domain.
    pub domain_join_username: String,
    /// Comma separated DNS servers of the domain.
    pub dns_list: String,
    /// Fully qualified domain name.
    pub ad_fqdn: String,
    /// SMB server name prefix.
    pub smb_server_prefix: String,
    /// Whether to delete everything at the end of the run.
    pub should_cleanup: bool,
}

impl Default for SampleConfig {
    fn default() -> SampleConfig {
        SampleConfig {
            location: String::from("eastus"),
            resource_group: String::from("anf01-rg"),
            vnet_resource_group: String::from("photoscan-rg"),
            vnet_name: String::from("photoscan-vnet"),
            subnet_name: String::from("anf-sn"),
            subnet_api_version: String::from("2018-11-01"),
            account_name: names::haikunate(),
            pool_name: String::from("Pool01"),
            service_level: ServiceLevel::Standard,
            pool_size: netapp::MIN_POOL_SIZE,
            volume_name: None,
            volume_size: netapp::MIN_VOLUME_SIZE,
            domain_join_username: String::from("pmcadmin"),
            dns_list: String::from("10.0.2.4,10.0.2.5"),
            ad_fqdn: String::from("testdomain.local"),
            smb_server_prefix: String::from("pmcsmb"),
            should_cleanup: false,
        }
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("{} cannot be empty", field),
        ))
    } else {
        Ok(())
    }
}

impl SampleConfig {
    fn from_reader<R: Read>(reader: R) -> Result<SampleConfig> {
        serde_yaml::from_reader(reader).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot parse sample configuration: {}", e),
            )
        })
    }

    /// Load the configuration from a YAML file.
    ///
    /// Missing parameters keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SampleConfig> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot read {}: {}", path.display(), e),
            )
        })?;
        debug!("Loading sample configuration from {}", path.display());
        SampleConfig::from_reader(file)
    }

    /// Load the configuration from the file referenced by `ANF_SAMPLE_CONFIG`.
    ///
    /// Returns the defaults when the variable is not set.
    pub fn from_env() -> Result<SampleConfig> {
        match env::var_os(SAMPLE_CONFIG_ENV) {
            Some(path) => SampleConfig::from_file(path),
            None => {
                trace!("{} is not set, using default parameters", SAMPLE_CONFIG_ENV);
                Ok(SampleConfig::default())
            }
        }
    }

    /// Check the parameters against the provider limits.
    pub fn validate(&self) -> Result<()> {
        require(&self.location, "Location")?;
        require(&self.resource_group, "Resource group")?;
        require(&self.vnet_resource_group, "Virtual network resource group")?;
        require(&self.vnet_name, "Virtual network name")?;
        require(&self.subnet_name, "Subnet name")?;
        require(&self.subnet_api_version, "Subnet API version")?;
        require(&self.account_name, "Account name")?;
        require(&self.pool_name, "Capacity pool name")?;
        require(&self.volume_name(), "Volume name")?;
        require(&self.domain_join_username, "Domain join user name")?;
        require(&self.ad_fqdn, "Active Directory domain")?;
        if self.dns_servers().is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "At least one DNS server is required",
            ));
        }
        netapp::validate_smb_server_prefix(&self.smb_server_prefix)?;
        netapp::validate_pool_size(self.pool_size)?;
        netapp::validate_volume_size(self.volume_size)?;
        if self.volume_size > self.pool_size {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "Volume size {} does not fit into the capacity pool of size {}",
                    self.volume_size, self.pool_size
                ),
            ));
        }
        Ok(())
    }

    /// Volume name (also used as its creation token).
    pub fn volume_name(&self) -> String {
        self.volume_name
            .clone()
            .unwrap_or_else(|| format!("Vol-{}-{}", self.account_name, self.pool_name))
    }

    /// DNS servers as a list.
    pub fn dns_servers(&self) -> Vec<&str> {
        self.dns_list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// ID of the delegated subnet in the given subscription.
    pub fn subnet_id(&self, subscription: &str) -> ResourceId {
        ResourceId::subnet(
            subscription,
            &self.vnet_resource_group,
            &self.vnet_name,
            &self.subnet_name,
        )
    }

    /// ID of the NetApp account in the given subscription.
    pub fn account_id(&self, subscription: &str) -> ResourceId {
        ResourceId::netapp_account(subscription, &self.resource_group, &self.account_name)
    }

    /// Active Directory connection joined with the given password.
    pub fn active_directory(&self, password: &str) -> ActiveDirectory {
        ActiveDirectory::new(
            self.ad_fqdn.as_str(),
            &self.dns_servers(),
            self.domain_join_username.as_str(),
            password,
            &self.smb_server_prefix,
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::super::netapp::ServiceLevel;
    use super::super::super::ErrorKind;
    use super::SampleConfig;

    #[test]
    fn test_defaults() {
        let config = SampleConfig::default();
        assert_eq!(config.location, "eastus");
        assert_eq!(config.pool_size, 4398046511104);
        assert_eq!(config.volume_size, 107374182400);
        assert_eq!(config.service_level, ServiceLevel::Standard);
        assert!(!config.should_cleanup);
        assert_eq!(
            config.volume_name(),
            format!("Vol-{}-Pool01", config.account_name)
        );
        assert_eq!(config.dns_servers(), vec!["10.0.2.4", "10.0.2.5"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ids() {
        let config = SampleConfig {
            account_name: String::from("acc1"),
            ..SampleConfig::default()
        };
        assert_eq!(
            config.subnet_id("0000").as_str(),
            "/subscriptions/0000/resourceGroups/photoscan-rg/providers/\
             Microsoft.Network/virtualNetworks/photoscan-vnet/subnets/anf-sn"
        );
        let account = config.account_id("0000");
        assert_eq!(account.account_name(), Some("acc1"));
        assert_eq!(account.resource_group(), Some("anf01-rg"));

        let ad = config.active_directory("pa$$w0rd");
        assert_eq!(ad.dns, "10.0.2.4,10.0.2.5");
        assert_eq!(ad.smb_server_name, "pmcsmb");
        assert_eq!(ad.password, "pa$$w0rd");
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = "
location: westeurope
account_name: acc2
service_level: Premium
volume_name: data
should_cleanup: true
";
        let config = SampleConfig::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(config.location, "westeurope");
        assert_eq!(config.account_name, "acc2");
        assert_eq!(config.service_level, ServiceLevel::Premium);
        assert_eq!(config.volume_name(), "data");
        assert!(config.should_cleanup);
        assert_eq!(config.resource_group, "anf01-rg");
    }

    #[test]
    fn test_yaml_rejects_unknown_fields() {
        let err = SampleConfig::from_reader("pool_sise: 1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_validation() {
        let mut config = SampleConfig {
            smb_server_prefix: String::from("much-too-long"),
            ..SampleConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::InvalidInput);

        config.smb_server_prefix = String::from("pmcsmb");
        config.pool_size = 1024;
        assert!(config.validate().is_err());

        config.pool_size = 4398046511104;
        config.volume_size = 5 * 4398046511104;
        assert!(config.validate().is_err());

        config.volume_size = 107374182400;
        config.dns_list = String::from(" , ");
        assert!(config.validate().is_err());

        config.dns_list = String::from("10.0.2.4");
        config.pool_name = String::new();
        assert!(config.validate().is_err());
    }
}
