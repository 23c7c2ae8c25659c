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

//! Handle to a remote resource known only by its ID.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::super::common::{DeletionWaiter, Refresh, ResourceId};
use super::super::session::Session;
use super::super::Result;

/// A remote resource known only by its ID.
///
/// Refreshing fails with `ResourceNotFound` once the resource is gone, which
/// makes it suitable for `DeletionWaiter`.
#[derive(Clone)]
pub struct ResourceHandle {
    session: Session,
    id: ResourceId,
    api_version: String,
}

impl ResourceHandle {
    /// Create a handle for the given resource.
    pub fn new<S: Into<String>>(session: Session, id: ResourceId, api_version: S) -> ResourceHandle {
        ResourceHandle {
            session,
            id,
            api_version: api_version.into(),
        }
    }

    /// Wait until the provider stops returning the resource.
    pub fn wait_for_deletion(self, timeout: Duration, delay: Duration) -> DeletionWaiter<Self> {
        DeletionWaiter::new(self, timeout, delay)
    }
}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id.as_str())
    }
}

#[async_trait]
impl Refresh for ResourceHandle {
    async fn refresh(&mut self) -> Result<()> {
        let _: serde_json::Value = self
            .session
            .get_json(self.id.as_str(), &self.api_version)
            .await?;
        Ok(())
    }
}
