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

//! Error and Result implementations.

use std::fmt;

use reqwest::{Error as HttpClientError, StatusCode};

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failure
    ///
    /// Maps to HTTP 401.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// Requested resource was not found.
    ///
    /// Roughly maps to HTTP 404 and 410.
    ResourceNotFound,

    /// Invalid value passed to one of paremeters.
    ///
    /// May be result of HTTP 400.
    InvalidInput,

    /// Invalid or missing local configuration.
    InvalidConfig,

    /// Conflict in the request.
    Conflict,

    /// Operation has reached the specified time out.
    OperationTimedOut,

    /// Long-running operation finished in a failed or canceled state.
    OperationFailed,

    /// Protocol-level error reported by underlying HTTP library.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,

    /// Internal server error.
    ///
    /// Maps to HTTP 5xx codes.
    InternalServerError,
}

/// Error from a management API call.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    status: Option<StatusCode>,
    code: Option<String>,
    message: Option<String>,
}

/// Result of a management API call.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error body returned by Azure Resource Manager.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CloudErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CloudErrorRoot {
    error: CloudErrorBody,
}

impl Error {
    /// Create a new error of the provided kind.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            status: None,
            code: None,
            message: Some(message.into()),
        }
    }

    /// Create with providing all details.
    pub(crate) fn new_with_details(
        kind: ErrorKind,
        status: Option<StatusCode>,
        code: Option<String>,
        message: Option<String>,
    ) -> Error {
        Error {
            kind,
            status,
            code,
            message,
        }
    }

    /// Build an error from a failed HTTP response.
    ///
    /// The body is parsed as a cloud error if possible, otherwise it is used
    /// verbatim as the message.
    pub(crate) fn from_response_body(status: StatusCode, body: &str) -> Error {
        let kind = ErrorKind::from_status(status);
        match serde_json::from_str::<CloudErrorRoot>(body) {
            Ok(root) => Error::new_with_details(kind, Some(status), root.error.code, root.error.message),
            Err(..) => {
                let message = if body.trim().is_empty() {
                    None
                } else {
                    Some(body.trim().to_string())
                };
                Error::new_with_details(kind, Some(status), None, message)
            }
        }
    }

    /// Build an error from a cloud error body embedded in an operation status.
    pub(crate) fn from_cloud_error(kind: ErrorKind, body: Option<CloudErrorBody>) -> Error {
        match body {
            Some(body) => Error::new_with_details(kind, None, body.code, body.message),
            None => Error::new_with_details(kind, None, None, None),
        }
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code (if any).
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Error code reported by the provider (if any).
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Error message (if any).
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::InvalidConfig => "Configuration is invalid or missing",
            ErrorKind::Conflict => "Requested cannot be fulfilled due to a conflict",
            ErrorKind::OperationTimedOut => "Time out reached while waiting for the operation",
            ErrorKind::OperationFailed => "Requested operation has failed",
            ErrorKind::ProtocolError => "Error when accessing the server",
            ErrorKind::InvalidResponse => "Received invalid response",
            ErrorKind::InternalServerError => "Internal server error or bad gateway",
        }
    }

    /// Error kind matching an HTTP status code.
    pub fn from_status(status: StatusCode) -> ErrorKind {
        match status {
            StatusCode::UNAUTHORIZED => ErrorKind::AuthenticationFailed,
            StatusCode::FORBIDDEN => ErrorKind::AccessDenied,
            StatusCode::NOT_FOUND | StatusCode::GONE => ErrorKind::ResourceNotFound,
            StatusCode::CONFLICT => ErrorKind::Conflict,
            c if c.is_client_error() => ErrorKind::InvalidInput,
            c if c.is_server_error() => ErrorKind::InternalServerError,
            _ => ErrorKind::InvalidResponse,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(ref code) = self.code {
            write!(f, " ({})", code)?;
        }

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)
        } else {
            Ok(())
        }
    }
}

impl ::std::error::Error for Error {}

impl From<HttpClientError> for Error {
    fn from(value: HttpClientError) -> Error {
        let msg = value.to_string();
        let kind = match value.status() {
            Some(status) => ErrorKind::from_status(status),
            None if value.is_decode() => ErrorKind::InvalidResponse,
            None if value.is_builder() => ErrorKind::InvalidInput,
            None => ErrorKind::ProtocolError,
        };

        Error::new_with_details(kind, value.status(), None, Some(msg))
    }
}

impl From<reqwest::header::ToStrError> for Error {
    fn from(value: reqwest::header::ToStrError) -> Error {
        Error::new(ErrorKind::InvalidResponse, value.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Error {
        Error::new(ErrorKind::InvalidInput, value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Error {
        Error::new(ErrorKind::InvalidResponse, value.to_string())
    }
}
