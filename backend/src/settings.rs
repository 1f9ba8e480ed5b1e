//! Portal configuration loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `KYC_PORTAL_*` environment variables and
//! configuration files. Raw values stay as loaded; the accessors parse and
//! validate them so startup fails with a precise message.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use actix_web::cookie::SameSite;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::RejectedLoginRoute;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CUSTOMER_API_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A value is present but cannot be used.
    #[error("invalid {key}='{value}': {reason}")]
    Invalid {
        /// Setting name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Why it was refused.
        reason: String,
    },
    /// Only half of the operator account was configured.
    #[error("auth_username and auth_password_sha256 must be set together")]
    IncompleteAccount,
}

impl SettingsError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Operator account checked by the configured login service.
#[derive(Clone)]
pub struct LoginAccount {
    /// Operator username.
    pub username: String,
    /// Hex SHA-256 digest of the operator password.
    pub password_sha256: String,
}

/// Configuration values for the portal server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "KYC_PORTAL")]
pub struct KycPortalSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the KYC backend serving `GET /customers`.
    pub customer_api_url: Option<String>,
    /// Chatbot endpoint receiving `POST {prompt}`; chat is disabled when unset.
    pub chat_endpoint: Option<String>,
    /// Timeout applied to every outbound request.
    pub request_timeout_secs: Option<u64>,
    /// Route for refused logins: `user-upload` or `login`.
    pub rejected_login_route: Option<String>,
    /// Operator username; the development fixture is used when unset.
    pub auth_username: Option<String>,
    /// Hex SHA-256 digest of the operator password.
    pub auth_password_sha256: Option<String>,
    /// File holding the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Permit a random session key when the key file is missing.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    /// Mark session cookies `Secure`.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies: `lax`, `strict` or `none`.
    pub session_same_site: Option<String>,
}

impl KycPortalSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|error| SettingsError::invalid("bind_addr", raw, error))
    }

    /// Return the customer API base URL, falling back to `http://localhost:8000`.
    pub fn customer_api_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .customer_api_url
            .as_deref()
            .unwrap_or(DEFAULT_CUSTOMER_API_URL);
        parse_http_url("customer_api_url", raw)
    }

    /// Return the chat endpoint when one is configured.
    pub fn chat_endpoint(&self) -> Result<Option<Url>, SettingsError> {
        match self.chat_endpoint.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_http_url("chat_endpoint", raw).map(Some),
        }
    }

    /// Return the outbound request timeout, falling back to ten seconds.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::invalid(
                "request_timeout_secs",
                "0",
                "must be at least one second",
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Return the route for refused logins, falling back to `/user-upload`.
    pub fn rejected_login_route(&self) -> Result<RejectedLoginRoute, SettingsError> {
        match self.rejected_login_route.as_deref() {
            None => Ok(RejectedLoginRoute::default()),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|error| SettingsError::invalid("rejected_login_route", raw, error)),
        }
    }

    /// Return the operator account when both halves are configured.
    pub fn login_account(&self) -> Result<Option<LoginAccount>, SettingsError> {
        let username = self.auth_username.as_deref().map(str::trim);
        let digest = self.auth_password_sha256.as_deref().map(str::trim);
        match (username, digest) {
            (None | Some(""), None | Some("")) => Ok(None),
            (Some(username), Some(digest)) if !username.is_empty() && !digest.is_empty() => {
                Ok(Some(LoginAccount {
                    username: username.to_owned(),
                    password_sha256: digest.to_owned(),
                }))
            }
            _ => Err(SettingsError::IncompleteAccount),
        }
    }

    /// Return the session key path, falling back to the mounted secret.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Return the cookie `SameSite` policy, falling back to `Lax`.
    pub fn session_same_site(&self) -> Result<SameSite, SettingsError> {
        let Some(raw) = self.session_same_site.as_deref() else {
            return Ok(SameSite::Lax);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            "none" => Ok(SameSite::None),
            _ => Err(SettingsError::invalid(
                "session_same_site",
                raw,
                "expected lax, strict or none",
            )),
        }
    }
}

fn parse_http_url(key: &'static str, raw: &str) -> Result<Url, SettingsError> {
    let url = Url::parse(raw.trim()).map_err(|error| SettingsError::invalid(key, raw, error))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SettingsError::invalid(
            key,
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}
