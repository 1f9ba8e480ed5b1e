//! Driven port for the authentication collaborator.
//!
//! The collaborator answers a single yes/no question per login attempt.
//! Transport failures are reported separately from a negative answer so the
//! login redirector never mistakes an outage for bad credentials.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::LoginCredentials;

define_port_error! {
    /// Errors raised when the authentication collaborator cannot answer.
    pub enum LoginServiceError {
        /// The collaborator could not be reached.
        Unavailable { message: String } =>
            "authentication service unavailable: {message}"; retryable,
        /// The collaborator did not answer in time.
        Timeout { message: String } =>
            "authentication service timed out: {message}"; retryable,
        /// The collaborator is misconfigured.
        Misconfigured { message: String } =>
            "authentication service misconfigured: {message}",
    }
}

/// Port for checking login credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return `true` when the credentials are valid.
    async fn login(&self, credentials: &LoginCredentials) -> Result<bool, LoginServiceError>;
}

/// Development authenticator accepting `admin` / `password` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<bool, LoginServiceError> {
        Ok(credentials.username() == "admin" && credentials.password() == "password")
    }
}
