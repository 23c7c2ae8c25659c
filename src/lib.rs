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

//! Azure NetApp Files management in Rust.
//!
//! Provisions NetApp accounts, capacity pools and SMB volumes through Azure
//! Resource Manager and waits for the long-running operations to finish.
//!
//! # Features
//!
//! * [Authentication](auth/index.html) with a service principal
//! * [NetApp Files API](netapp/index.html)
//! * The [SMB volume provisioning workflow](sample/index.html)
//!
//! # Example
//!
//! ```rust,no_run
//! use netappfiles::ResourceId;
//!
//! # async fn example() -> netappfiles::Result<()> {
//! let cloud = netappfiles::Cloud::from_env()?;
//! let subnet = ResourceId::subnet(cloud.subscription_id(), "rg", "vnet", "anf-sn");
//! let exists = cloud.resource_exists(&subnet, "2018-11-01").await?;
//! # Ok(()) }
//! ```

// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
// Taken from https://github.com/rust-unofficial/patterns/
#![deny(
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    while_true
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod auth;
mod cloud;
mod common;
mod error;
pub mod netapp;
pub mod sample;
mod session;

pub use cloud::Cloud;
pub use common::{DeletionWaiter, Refresh, ResourceId, Waiter, NETAPP_PROVIDER};
pub use error::{Error, ErrorKind, Result};
pub use session::Session;
