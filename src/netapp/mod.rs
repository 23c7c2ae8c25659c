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

//! NetApp Files API: accounts, capacity pools and volumes.

pub mod api;
mod handle;
pub mod protocol;

pub use self::api::NETAPP_API_VERSION;
pub use self::handle::ResourceHandle;
pub use self::protocol::{
    AccountProperties, ActiveDirectory, CapacityPool, MountTarget, NetAppAccount, PoolProperties,
    ProtocolType, ServiceLevel, Volume, VolumeProperties,
};

use super::{Error, ErrorKind, Result};

const GIB: u64 = 1024 * 1024 * 1024;
const TIB: u64 = 1024 * GIB;

/// Smallest capacity pool (4 TiB).
pub const MIN_POOL_SIZE: u64 = 4 * TIB;
/// Largest capacity pool (500 TiB).
pub const MAX_POOL_SIZE: u64 = 500 * TIB;
/// Smallest volume quota (100 GiB).
pub const MIN_VOLUME_SIZE: u64 = 100 * GIB;
/// Largest volume quota (100 TiB).
pub const MAX_VOLUME_SIZE: u64 = 100 * TIB;
/// Longest allowed SMB server name prefix.
pub const MAX_SMB_SERVER_PREFIX: usize = 10;

fn check_range(what: &str, value: u64, min: u64, max: u64) -> Result<()> {
    if value < min || value > max {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "{} size {} bytes is outside of the allowed range [{}, {}]",
                what, value, min, max
            ),
        ))
    } else {
        Ok(())
    }
}

/// Check that a capacity pool size is within the provider limits.
pub fn validate_pool_size(size: u64) -> Result<()> {
    check_range("Capacity pool", size, MIN_POOL_SIZE, MAX_POOL_SIZE)
}

/// Check that a volume quota is within the provider limits.
pub fn validate_volume_size(size: u64) -> Result<()> {
    check_range("Volume", size, MIN_VOLUME_SIZE, MAX_VOLUME_SIZE)
}

/// Check an SMB server name prefix.
pub fn validate_smb_server_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || prefix.chars().count() > MAX_SMB_SERVER_PREFIX {
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "SMB server name prefix {:?} must have between 1 and {} characters",
                prefix, MAX_SMB_SERVER_PREFIX
            ),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert_eq!(MIN_POOL_SIZE, 4398046511104);
        assert_eq!(MIN_VOLUME_SIZE, 107374182400);
        assert!(validate_pool_size(MIN_POOL_SIZE).is_ok());
        assert!(validate_pool_size(MAX_POOL_SIZE).is_ok());
        assert!(validate_pool_size(MIN_POOL_SIZE - 1).is_err());
        assert!(validate_pool_size(MAX_POOL_SIZE + 1).is_err());
        assert!(validate_volume_size(MIN_VOLUME_SIZE).is_ok());
        assert!(validate_volume_size(MAX_VOLUME_SIZE).is_ok());
        assert_eq!(
            validate_volume_size(MIN_VOLUME_SIZE - 1).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_smb_server_prefix() {
        assert!(validate_smb_server_prefix("pmcsmb").is_ok());
        assert!(validate_smb_server_prefix("0123456789").is_ok());
        assert!(validate_smb_server_prefix("0123456789a").is_err());
        assert!(validate_smb_server_prefix("").is_err());
    }
}
