//! Messaging client handle for a Twilio-style REST API.
//!
//! Construction never issues a request; the handle carries everything a
//! later authenticated call would need.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use std::env;
use std::fmt;

/// Environment variable holding the account SID.
pub const ENV_ACCOUNT_SID: &str = "TWILIO_SID";

/// Environment variable holding the auth token.
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";

/// Default messaging API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

/// Credential pair for the messaging API.
///
/// Values are taken as-is from the environment. Missing variables stay
/// `None`; no shape or emptiness checks are applied.
#[derive(Clone, Default)]
pub struct Credentials {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(account_sid: Option<String>, auth_token: Option<String>) -> Self {
        Self {
            account_sid,
            auth_token,
        }
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self {
            account_sid: env::var(ENV_ACCOUNT_SID).ok(),
            auth_token: env::var(ENV_AUTH_TOKEN).ok(),
        }
    }

    /// Both values are present.
    pub fn is_complete(&self) -> bool {
        self.account_sid.is_some() && self.auth_token.is_some()
    }

    /// Value for the HTTP Basic Authorization header, when complete.
    fn authorization(&self) -> Option<String> {
        match (&self.account_sid, &self.auth_token) {
            (Some(sid), Some(token)) => {
                let encoded = STANDARD.encode(format!("{}:{}", sid, token));
                Some(format!("Basic {}", encoded))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Configuration for the messaging API client.
#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
        }
    }
}

impl MessagingConfig {
    /// Create a configuration with credentials read from the environment.
    pub fn from_env() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::from_env(),
        }
    }

    /// Create a new MessagingConfig with custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a new MessagingConfig with the given credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Client handle for the messaging REST API.
///
/// Construction always succeeds. Absent or partial credentials yield an
/// unauthenticated handle; any request made through it later would be
/// rejected by the remote API, not by this crate.
pub struct MessagingClient {
    client: Client,
    base_url: String,
    account_sid: Option<String>,
    authorization: Option<String>,
}

impl MessagingClient {
    /// Create a new MessagingClient with the given configuration.
    pub fn new(config: MessagingConfig) -> Self {
        let authorization = config.credentials.authorization();
        Self {
            client: Client::new(),
            base_url: config.base_url,
            account_sid: config.credentials.account_sid,
            authorization,
        }
    }

    /// Create a new MessagingClient with credentials from the environment.
    pub fn from_env() -> Self {
        Self::new(MessagingConfig::from_env())
    }

    /// Both credentials were present at construction.
    pub fn is_authenticated(&self) -> bool {
        self.authorization.is_some()
    }

    /// Account SID the handle was constructed with, if any.
    pub fn account_sid(&self) -> Option<&str> {
        self.account_sid.as_deref()
    }

    /// API base URL the handle points at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    #[cfg(test)]
    fn authorization_header(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}

impl fmt::Display for MessagingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.account_sid, self.is_authenticated()) {
            (Some(sid), true) => {
                write!(f, "MessagingClient(account_sid={}, base_url={})", sid, self.base_url)
            }
            (Some(sid), false) => write!(
                f,
                "MessagingClient(account_sid={}, unauthenticated, base_url={})",
                sid, self.base_url
            ),
            (None, _) => write!(
                f,
                "MessagingClient(unauthenticated, base_url={})",
                self.base_url
            ),
        }
    }
}

impl fmt::Debug for MessagingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagingClient")
            .field("base_url", &self.base_url)
            .field("account_sid", &self.account_sid)
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new(Some("AC123".to_string()), Some("secret".to_string()))
    }

    #[test]
    fn test_credentials_complete() {
        assert!(test_credentials().is_complete());
        assert!(!Credentials::default().is_complete());
        assert!(!Credentials::new(Some("AC123".to_string()), None).is_complete());
    }

    #[test]
    fn test_authorization_header_encoding() {
        let config = MessagingConfig::default().with_credentials(test_credentials());
        let client = MessagingClient::new(config);
        // base64("AC123:secret")
        assert_eq!(
            client.authorization_header(),
            Some("Basic QUMxMjM6c2VjcmV0")
        );
    }

    #[test]
    fn test_display_names_sid_and_redacts_token() {
        let config = MessagingConfig::default().with_credentials(test_credentials());
        let client = MessagingClient::new(config);
        let rendered = client.to_string();
        assert!(!rendered.is_empty());
        assert!(rendered.contains("AC123"));
        assert!(!rendered.contains("secret"));

        let debugged = format!("{:?}", client);
        assert!(!debugged.contains("secret"));
    }

    #[test]
    fn test_unauthenticated_display() {
        let client = MessagingClient::new(MessagingConfig::default());
        assert!(!client.is_authenticated());
        assert!(client.to_string().contains("unauthenticated"));
    }

    #[test]
    fn test_partial_credentials_unauthenticated() {
        let credentials = Credentials::new(Some("AC123".to_string()), None);
        let config = MessagingConfig::default().with_credentials(credentials);
        let client = MessagingClient::new(config);
        assert!(!client.is_authenticated());
        assert_eq!(client.account_sid(), Some("AC123"));
        assert!(client.to_string().contains("unauthenticated"));
    }

    #[test]
    fn test_credentials_from_env() {
        env::set_var(ENV_ACCOUNT_SID, "AC456");
        env::set_var(ENV_AUTH_TOKEN, "token456");

        let credentials = Credentials::from_env();
        assert_eq!(credentials.account_sid.as_deref(), Some("AC456"));
        assert!(credentials.is_complete());
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let debugged = format!("{:?}", test_credentials());
        assert!(debugged.contains("AC123"));
        assert!(!debugged.contains("secret"));
    }
}
