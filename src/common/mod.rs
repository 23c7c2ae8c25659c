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

//! Types and traits shared by all API parts.

mod operation;
pub(crate) mod protocol;
mod resourceid;
mod types;
mod waiter;

pub(crate) use self::operation::OperationWaiter;
pub use self::resourceid::{ResourceId, NETAPP_PROVIDER};
pub use self::types::Refresh;
pub use self::waiter::{DeletionWaiter, Waiter};
