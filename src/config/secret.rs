//! Secret handling for API credentials
//!
//! The Slides access token and API key are wrapped in `secrecy` containers so
//! they are zeroed on drop and never appear in `Debug` output or logs. Code
//! that builds a request has to call `expose_secret()` explicitly.
//!
//! # Example
//!
//! ```rust
//! use slide_export::config::{SecretString, secret_string};
//! use secrecy::ExposeSecret;
//!
//! let token: SecretString = secret_string("ya29.a0Af...".to_string());
//! assert_eq!(token.expose_secret().as_ref(), "ya29.a0Af...");
//!
//! // Debug output is redacted
//! assert!(!format!("{token:?}").contains("ya29"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a secret, zeroed on drop
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A secret string: zeroed on drop, redacted in Debug, explicit access only
pub type SecretString = Secret<SecretValue>;

/// Wrap a String as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("token-123".to_string());
        assert_eq!(secret.expose_secret(), "token-123");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-token".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-token"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_blank_secret_is_empty() {
        assert!(secret_string("  ".to_string()).expose_secret().is_empty());
        assert!(!secret_string("k".to_string()).expose_secret().is_empty());
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Creds {
            api_key: SecretString,
        }

        let creds: Creds = toml::from_str("api_key = \"AIza-test\"").unwrap();
        assert_eq!(creds.api_key.expose_secret(), "AIza-test");
    }
}
