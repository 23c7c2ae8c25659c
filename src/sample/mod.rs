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

//! Provisioning of an SMB volume.
//!
//! The workflow checks that the delegated subnet exists, creates a NetApp
//! account joined to an Active Directory domain, a capacity pool and a CIFS
//! volume, and optionally deletes all of them again.
//!
//! # Example
//!
//! ```rust,no_run
//! use netappfiles::sample::{self, Console, SampleConfig};
//!
//! # async fn example() -> netappfiles::Result<()> {
//! let cloud = netappfiles::Cloud::from_env()?;
//! let config = SampleConfig::from_env()?;
//! let mut console = Console::stdout();
//! let created = sample::run(&cloud, &config, "pa$$w0rd", false, &mut console).await?;
//! println!("{}", created.volume_ids[0]);
//! # Ok(()) }
//! ```

mod api;
mod config;
mod console;
pub mod names;
mod workflow;

pub use self::api::{ProvisioningApi, PROPAGATION_DELAY, PROPAGATION_TIMEOUT};
pub use self::config::{SampleConfig, SAMPLE_CONFIG_ENV};
pub use self::console::Console;
pub use self::workflow::{check_password, cleanup, run, ProvisionedResources};
