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

//! Common protocol bits.

#![allow(missing_docs)]

use serde::de::Error as DeserError;
use serde::{Deserialize, Deserializer};

use super::super::error::CloudErrorBody;

/// Deserialize an integer that may be sent as a string.
pub fn deser_u64_or_string<'de, D>(des: D) -> ::std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(u64),
        Text(String),
    }

    match Value::deserialize(des)? {
        Value::Number(n) => Ok(n),
        Value::Text(s) => s.trim().parse().map_err(DeserError::custom),
    }
}

/// Status of a long-running operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Succeeded,
    Failed,
    Canceled,
    InProgress(String),
}

impl OperationStatus {
    pub fn parse(value: &str) -> OperationStatus {
        if value.eq_ignore_ascii_case("succeeded") {
            OperationStatus::Succeeded
        } else if value.eq_ignore_ascii_case("failed") {
            OperationStatus::Failed
        } else if value.eq_ignore_ascii_case("canceled") || value.eq_ignore_ascii_case("cancelled")
        {
            OperationStatus::Canceled
        } else {
            OperationStatus::InProgress(value.to_string())
        }
    }
}

/// Body returned by an `Azure-AsyncOperation` status URL.
#[derive(Debug, Clone, Deserialize)]
pub struct AsyncOperation {
    pub status: String,
    #[serde(default)]
    pub error: Option<CloudErrorBody>,
}

/// Minimal view of any resource, used to check its provisioning state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenericResource {
    #[serde(default)]
    pub properties: Option<GenericProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericProperties {
    #[serde(default)]
    pub provisioning_state: Option<String>,
}

impl GenericResource {
    pub fn provisioning_state(&self) -> Option<OperationStatus> {
        self.properties
            .as_ref()
            .and_then(|p| p.provisioning_state.as_deref())
            .map(OperationStatus::parse)
    }
}

#[cfg(test)]
mod test {
    use super::{AsyncOperation, GenericResource, OperationStatus};

    #[test]
    fn test_operation_status_parse() {
        assert_eq!(OperationStatus::parse("Succeeded"), OperationStatus::Succeeded);
        assert_eq!(OperationStatus::parse("FAILED"), OperationStatus::Failed);
        assert_eq!(OperationStatus::parse("Canceled"), OperationStatus::Canceled);
        assert_eq!(
            OperationStatus::parse("Creating"),
            OperationStatus::InProgress("Creating".to_string())
        );
    }

    #[test]
    fn test_async_operation_with_error() {
        let op: AsyncOperation = serde_json::from_str(
            r#"{"id": "/x", "name": "abc", "status": "Failed",
                "error": {"code": "InvalidSubnet", "message": "Subnet is not delegated"}}"#,
        )
        .unwrap();
        assert_eq!(OperationStatus::parse(&op.status), OperationStatus::Failed);
        let error = op.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("InvalidSubnet"));
        assert_eq!(error.message.as_deref(), Some("Subnet is not delegated"));
    }

    #[test]
    fn test_generic_resource_state() {
        let res: GenericResource = serde_json::from_str(
            r#"{"id": "/x", "properties": {"provisioningState": "Updating"}}"#,
        )
        .unwrap();
        assert_eq!(
            res.provisioning_state(),
            Some(OperationStatus::InProgress("Updating".to_string()))
        );

        let res: GenericResource = serde_json::from_str(r#"{"id": "/x"}"#).unwrap();
        assert!(res.provisioning_state().is_none());
    }
}
