//! Authentication primitives such as login credentials.
//!
//! The login form performs no client-side validation, so credentials accept
//! any pair of strings and leave the decision to the authentication port.

use std::fmt;

use zeroize::Zeroizing;

/// Credentials captured for a single login attempt.
///
/// ## Invariants
/// - Values are stored exactly as submitted; no trimming or emptiness checks.
/// - The password lives in zeroizing storage and never appears in `Debug`.
///
/// # Examples
/// ```
/// use kyc_portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("officer", "hunter2");
/// assert_eq!(creds.username(), "officer");
/// assert_eq!(creds.password(), "hunter2");
/// assert!(!format!("{creds:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture raw username/password inputs.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Username as submitted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
