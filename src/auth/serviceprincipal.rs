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

//! Service principal authentication.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Url};

use super::super::common::protocol;
use super::super::{Error, ErrorKind, Result};

/// Tokens are refreshed this long before they expire.
const EXPIRY_LEEWAY_SECS: i64 = 300;

/// Active Directory authority of the public cloud.
pub(crate) const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com/";
/// Resource Manager endpoint of the public cloud.
pub(crate) const DEFAULT_RESOURCE_MANAGER: &str = "https://management.azure.com/";

static DEFAULT_AUTHORITY_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_AUTHORITY).expect("default authority URL is valid"));
static DEFAULT_RESOURCE_MANAGER_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_RESOURCE_MANAGER).expect("default resource manager URL is valid")
});

/// Service principal credentials.
///
/// The client secret is never printed by the `Debug` implementation.
#[derive(Clone)]
pub struct ServicePrincipal {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    subscription_id: String,
    authority: Url,
    resource_manager: Url,
}

/// An access token with its expiration time.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(deserialize_with = "protocol::deser_u64_or_string")]
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

fn default_token_type() -> String {
    String::from("Bearer")
}

fn expiry_from(now: DateTime<Utc>, expires_in: u64) -> Result<DateTime<Utc>> {
    i64::try_from(expires_in)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidResponse,
                format!("Token lifetime of {} seconds is out of range", expires_in),
            )
        })
}

impl ServicePrincipal {
    /// Create service principal credentials for the public cloud.
    pub fn new<S1, S2, S3, S4>(
        tenant_id: S1,
        client_id: S2,
        client_secret: S3,
        subscription_id: S4,
    ) -> ServicePrincipal
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        ServicePrincipal {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            subscription_id: subscription_id.into(),
            authority: DEFAULT_AUTHORITY_URL.clone(),
            resource_manager: DEFAULT_RESOURCE_MANAGER_URL.clone(),
        }
    }

    /// Load credentials from an authentication file.
    pub fn from_auth_file<P: AsRef<Path>>(path: P) -> Result<ServicePrincipal> {
        super::from_auth_file(path)
    }

    /// Load credentials from the file referenced by `AZURE_AUTH_LOCATION`.
    pub fn from_env() -> Result<ServicePrincipal> {
        super::from_env()
    }

    /// Use a different Active Directory authority (sovereign clouds).
    pub fn with_authority(mut self, authority: Url) -> ServicePrincipal {
        self.authority = authority;
        self
    }

    /// Use a different Resource Manager endpoint (sovereign clouds).
    pub fn with_resource_manager(mut self, resource_manager: Url) -> ServicePrincipal {
        self.resource_manager = resource_manager;
        self
    }

    /// Application (client) ID.
    #[inline]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Directory (tenant) ID.
    #[inline]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Subscription the credentials are used with.
    #[inline]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Active Directory authority URL.
    #[inline]
    pub fn authority(&self) -> &Url {
        &self.authority
    }

    /// Resource Manager endpoint, also used as the token audience.
    #[inline]
    pub fn resource_manager(&self) -> &Url {
        &self.resource_manager
    }

    fn token_url(&self) -> Result<Url> {
        let mut url = self.authority.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|_| {
                Error::new(
                    ErrorKind::InvalidConfig,
                    format!("Authority {} cannot be a base URL", self.authority),
                )
            })?
            .pop_if_empty()
            .extend(&[self.tenant_id.as_str(), "oauth2", "token"]);
        Ok(url)
    }

    /// Request a new access token.
    pub async fn get_token(&self, client: &Client) -> Result<AccessToken> {
        let url = self.token_url()?;
        debug!(
            "Requesting a token for client {} from {}",
            self.client_id, url
        );
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("resource", self.resource_manager.as_str()),
        ];
        let resp = client.post(url).form(&params).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = match serde_json::from_str::<TokenError>(&body) {
                Ok(err) => err.error_description.unwrap_or(err.error),
                Err(..) => body,
            };
            return Err(Error::new_with_details(
                ErrorKind::AuthenticationFailed,
                Some(status),
                None,
                Some(message),
            ));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        if !token.token_type.eq_ignore_ascii_case("bearer") {
            return Err(Error::new(
                ErrorKind::InvalidResponse,
                format!("Unsupported token type {}", token.token_type),
            ));
        }

        let expires_at = expiry_from(Utc::now(), token.expires_in)?;
        trace!("Received a token expiring at {}", expires_at);
        Ok(AccessToken::new(token.access_token, expires_at))
    }
}

impl fmt::Debug for ServicePrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicePrincipal")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<hidden>")
            .field("subscription_id", &self.subscription_id)
            .field("authority", &self.authority.as_str())
            .field("resource_manager", &self.resource_manager.as_str())
            .finish()
    }
}

impl AccessToken {
    /// Create a token.
    pub fn new<S: Into<String>>(value: S, expires_at: DateTime<Utc>) -> AccessToken {
        AccessToken {
            value: value.into(),
            expires_at,
        }
    }

    /// Token value to send as a bearer token.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Expiration time.
    #[inline]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token has to be refreshed at the given moment.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_LEEWAY_SECS) >= self.expires_at
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<hidden>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};

    use super::super::super::ErrorKind;
    use super::{expiry_from, AccessToken, ServicePrincipal, TokenResponse};

    #[test]
    fn test_token_url() {
        let sp = ServicePrincipal::new("tenant1", "client", "secret", "sub");
        assert_eq!(
            sp.token_url().unwrap().as_str(),
            "https://login.microsoftonline.com/tenant1/oauth2/token"
        );
    }

    #[test]
    fn test_default_endpoints() {
        let sp = ServicePrincipal::new("tenant1", "client", "secret", "sub");
        assert_eq!(sp.authority().as_str(), "https://login.microsoftonline.com/");
        assert_eq!(sp.resource_manager().as_str(), "https://management.azure.com/");
    }

    #[test]
    fn test_token_expiry_out_of_range() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            expiry_from(now, 3600).unwrap(),
            now + Duration::hours(1)
        );
        let err = expiry_from(now, u64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
        let err = expiry_from(now, i64::MAX as u64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[test]
    fn test_token_needs_refresh() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let token = AccessToken::new("abc", now + Duration::hours(1));
        assert!(!token.needs_refresh(now));
        assert!(!token.needs_refresh(now + Duration::minutes(54)));
        assert!(token.needs_refresh(now + Duration::minutes(55)));
        assert!(token.needs_refresh(now + Duration::hours(2)));
        assert!(!format!("{:?}", token).contains("abc"));
    }

    #[test]
    fn test_token_response_expiry_formats() {
        let v1: TokenResponse = serde_json::from_str(
            r#"{"token_type": "Bearer", "expires_in": "3599", "access_token": "x"}"#,
        )
        .unwrap();
        assert_eq!(v1.expires_in, 3599);

        let v2: TokenResponse =
            serde_json::from_str(r#"{"expires_in": 3600, "access_token": "y"}"#).unwrap();
        assert_eq!(v2.expires_in, 3600);
        assert_eq!(v2.token_type, "Bearer");
    }
}
