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

//! Support for the authentication file.

use std::env;
use std::fs::File;
use std::path::Path;

use reqwest::Url;

use super::super::{Error, ErrorKind, Result};
use super::serviceprincipal::{DEFAULT_AUTHORITY, DEFAULT_RESOURCE_MANAGER};
use super::ServicePrincipal;

/// Environment variable holding the path to the authentication file.
pub const AUTH_LOCATION_ENV: &str = "AZURE_AUTH_LOCATION";


#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthFile {
    client_id: String,
    client_secret: String,
    subscription_id: String,
    tenant_id: String,
    #[serde(default)]
    active_directory_endpoint_url: Option<String>,
    #[serde(default)]
    resource_manager_endpoint_url: Option<String>,
}

fn parse_url(value: Option<String>, default: &str, field: &str) -> Result<Url> {
    let value = value.unwrap_or_else(|| String::from(default));
    Url::parse(&value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidConfig,
            format!("Invalid {} {}: {}", field, value, e),
        )
    })
}

fn from_reader<R: ::std::io::Read>(reader: R) -> Result<ServicePrincipal> {
    let file: AuthFile = serde_json::from_reader(reader).map_err(|e| {
        Error::new(
            ErrorKind::InvalidConfig,
            format!("Cannot parse authentication file: {}", e),
        )
    })?;

    let authority = parse_url(
        file.active_directory_endpoint_url,
        DEFAULT_AUTHORITY,
        "activeDirectoryEndpointUrl",
    )?;
    let resource_manager = parse_url(
        file.resource_manager_endpoint_url,
        DEFAULT_RESOURCE_MANAGER,
        "resourceManagerEndpointUrl",
    )?;

    Ok(ServicePrincipal::new(
        file.tenant_id,
        file.client_id,
        file.client_secret,
        file.subscription_id,
    )
    .with_authority(authority)
    .with_resource_manager(resource_manager))
}

/// Create a `ServicePrincipal` from an authentication file.
pub fn from_auth_file<P: AsRef<Path>>(path: P) -> Result<ServicePrincipal> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(
            ErrorKind::InvalidConfig,
            format!("Cannot read {}: {}", path.display(), e),
        )
    })?;
    debug!("Loading service principal from {}", path.display());
    from_reader(file)
}

/// Create a `ServicePrincipal` from the file referenced by `AZURE_AUTH_LOCATION`.
pub fn from_env() -> Result<ServicePrincipal> {
    match env::var_os(AUTH_LOCATION_ENV) {
        Some(path) => from_auth_file(path),
        None => Err(Error::new(
            ErrorKind::InvalidConfig,
            format!("{} environment variable is not set", AUTH_LOCATION_ENV),
        )),
    }
}
