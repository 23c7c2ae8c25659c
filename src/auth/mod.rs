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

//! Authentication against Azure Active Directory.
//!
//! Management API calls are authorized with a bearer token obtained for a
//! service principal (an application registered in the directory) using the
//! OAuth2 client credentials flow.
//!
//! The usual workflow is as follows:
//!
//! 1. Create a service principal by hand or from an authentication file.
//! 2. Pass it to [Cloud::new](../struct.Cloud.html#method.new), which fetches
//!    and caches tokens as needed.
//!
//! # Authentication file
//!
//! The file is the one produced by `az ad sp create-for-rbac --sdk-auth`:
//!
//! ```json
//! {
//!   "clientId": "...",
//!   "clientSecret": "...",
//!   "subscriptionId": "...",
//!   "tenantId": "...",
//!   "activeDirectoryEndpointUrl": "https://login.microsoftonline.com",
//!   "resourceManagerEndpointUrl": "https://management.azure.com/"
//! }
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! # fn example() -> netappfiles::Result<()> {
//! let auth = netappfiles::auth::ServicePrincipal::from_env()?;
//! let cloud = netappfiles::Cloud::new(auth)?;
//! # Ok(()) }
//! ```

mod config;
mod serviceprincipal;

pub use self::config::{from_auth_file, from_env, AUTH_LOCATION_ENV};
pub use self::serviceprincipal::{AccessToken, ServicePrincipal};
