//! Credential configuration
//!
//! Credentials come from either a JSON config file or two environment
//! variables. They are validated up front and injected into the client;
//! there is no process-wide credential holder.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variable pointing at a JSON credentials file.
pub const CONFIG_FILE_ENV: &str = "ECONOMIC_CONFIG_FILE";
/// Environment variable holding the agreement grant token.
pub const AGREEMENT_GRANT_ENV: &str = "ECONOMIC_AGREEMENT_GRANT_TOKEN";
/// Environment variable holding the app secret token.
pub const APP_SECRET_ENV: &str = "ECONOMIC_APP_SECRET_TOKEN";

/// The credential pair required by every e-conomic call.
///
/// The JSON field names match the vendor's config-file convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Token granting access to one specific agreement.
    #[serde(rename = "agreement_grant")]
    pub agreement_grant_token: String,

    /// Secret token identifying the calling application.
    #[serde(rename = "app_secret")]
    pub app_secret_token: String,
}

impl Credentials {
    /// Create credentials from the two token values.
    pub fn new(
        agreement_grant_token: impl Into<String>,
        app_secret_token: impl Into<String>,
    ) -> Self {
        Self {
            agreement_grant_token: agreement_grant_token.into(),
            app_secret_token: app_secret_token.into(),
        }
    }

    /// Read credentials from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let creds: Credentials = serde_json::from_str(&content)?;
        creds.validate()?;
        info!(
            "Read config from file: Grant {}XXXXXX, App {}XXXXXX",
            redact(&creds.agreement_grant_token),
            redact(&creds.app_secret_token)
        );
        Ok(creds)
    }

    /// Read credentials from `ECONOMIC_AGREEMENT_GRANT_TOKEN` and
    /// `ECONOMIC_APP_SECRET_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let grant = std::env::var(AGREEMENT_GRANT_ENV).unwrap_or_default();
        let secret = std::env::var(APP_SECRET_ENV).unwrap_or_default();
        let creds = Credentials::new(grant, secret);
        creds.validate().map_err(|_| {
            Error::config(format!(
                "{CONFIG_FILE_ENV} or {AGREEMENT_GRANT_ENV} and {APP_SECRET_ENV} must be set"
            ))
        })?;
        info!(
            "Read config from env: Grant {}XXXXXX, App {}XXXXXX",
            redact(&creds.agreement_grant_token),
            redact(&creds.app_secret_token)
        );
        Ok(creds)
    }

    /// Load credentials from an explicit file path, falling back to the
    /// `ECONOMIC_CONFIG_FILE` path, falling back to the token variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            if !path.is_empty() {
                return Self::from_file(path);
            }
        }
        Self::from_env()
    }

    /// Reject empty tokens. Both fields must be non-empty before any call.
    pub fn validate(&self) -> Result<()> {
        if self.agreement_grant_token.is_empty() || self.app_secret_token.is_empty() {
            return Err(Error::config(
                "missing agreement grant token or app secret token",
            ));
        }
        Ok(())
    }
}

fn redact(token: &str) -> String {
    token.chars().take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_rejects_empty_tokens() {
        assert!(Credentials::new("", "").validate().is_err());
        assert!(Credentials::new("grant", "").validate().is_err());
        assert!(Credentials::new("", "secret").validate().is_err());
        assert!(Credentials::new("grant", "secret").validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"agreement_grant": "grant-token", "app_secret": "secret-token"}}"#
        )
        .unwrap();

        let creds = Credentials::from_file(file.path()).unwrap();
        assert_eq!(creds.agreement_grant_token, "grant-token");
        assert_eq!(creds.app_secret_token, "secret-token");
    }

    #[test]
    fn test_from_file_rejects_incomplete_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"agreement_grant": "grant-token"}}"#).unwrap();

        assert!(Credentials::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing_path() {
        assert!(Credentials::from_file("/nonexistent/economic.json").is_err());
    }

    #[test]
    fn test_redact_keeps_a_short_prefix() {
        assert_eq!(redact("ab"), "ab");
        assert_eq!(redact("abcdef"), "abcd");
        // Multi-byte tokens must not split a character.
        assert_eq!(redact("日本語トークン"), "日本語ト");
    }

    #[test]
    fn test_from_file_accepts_multibyte_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"agreement_grant": "日本語トークン", "app_secret": "secret-token"}}"#
        )
        .unwrap();

        let creds = Credentials::from_file(file.path()).unwrap();
        assert_eq!(creds.agreement_grant_token, "日本語トークン");
    }
}
