//! Login service backed by one operator account from configuration.
//!
//! The password is never stored: configuration carries its SHA-256 digest as
//! hex, and each attempt is hashed and compared in constant time.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::LoginCredentials;
use crate::domain::ports::{LoginService, LoginServiceError};

const DIGEST_LEN: usize = 32;

/// Authenticator comparing submissions against a configured account.
pub struct ConfiguredLoginService {
    username: String,
    password_digest: [u8; DIGEST_LEN],
}

impl ConfiguredLoginService {
    /// Build the service from a username and hex-encoded SHA-256 password digest.
    ///
    /// # Errors
    ///
    /// Returns [`LoginServiceError::Misconfigured`] when the digest is not 64
    /// hex characters.
    ///
    /// # Examples
    /// ```
    /// use kyc_portal::outbound::auth::ConfiguredLoginService;
    ///
    /// let digest = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
    /// assert!(ConfiguredLoginService::new("officer", digest).is_ok());
    /// assert!(ConfiguredLoginService::new("officer", "not-hex").is_err());
    /// ```
    pub fn new(
        username: impl Into<String>,
        password_sha256_hex: &str,
    ) -> Result<Self, LoginServiceError> {
        let mut password_digest = [0_u8; DIGEST_LEN];
        hex::decode_to_slice(password_sha256_hex.trim(), &mut password_digest).map_err(
            |error| LoginServiceError::misconfigured(format!("invalid password digest: {error}")),
        )?;
        Ok(Self {
            username: username.into(),
            password_digest,
        })
    }
}

#[async_trait]
impl LoginService for ConfiguredLoginService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<bool, LoginServiceError> {
        let submitted = Sha256::digest(credentials.password().as_bytes());
        let username_matches = credentials
            .username()
            .as_bytes()
            .ct_eq(self.username.as_bytes());
        let password_matches = submitted.as_slice().ct_eq(&self.password_digest);
        Ok(bool::from(username_matches & password_matches))
    }
}
