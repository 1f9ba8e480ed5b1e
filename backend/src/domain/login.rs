//! Login redirector: turns one credential check into the next portal route.
//!
//! ```text
//! login(credentials) == true   -> /kyc-dashboard
//! login(credentials) == false  -> rejected-login route (/user-upload by default)
//! login(credentials) fails     -> /login, error shown, retry allowed
//! ```
//!
//! Routing a rejected login to the upload page is the portal's current
//! behaviour and is kept as the default. Deployments can select `/login`
//! instead through [`RejectedLoginRoute`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use super::LoginCredentials;
use super::ports::LoginService;

/// Portal route a login attempt sends the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Officer dashboard, reached after a successful login.
    KycDashboard,
    /// Document upload page.
    UserUpload,
    /// The login page itself.
    Login,
}

impl Destination {
    /// Client-side route path.
    pub fn path(self) -> &'static str {
        match self {
            Self::KycDashboard => "/kyc-dashboard",
            Self::UserUpload => "/user-upload",
            Self::Login => "/login",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Where a rejected login is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectedLoginRoute {
    /// Upload page; the portal's established behaviour.
    #[default]
    UserUpload,
    /// Back to the login page with the failure flag set.
    Login,
}

impl RejectedLoginRoute {
    /// Destination for a rejected attempt.
    pub fn destination(self) -> Destination {
        match self {
            Self::UserUpload => Destination::UserUpload,
            Self::Login => Destination::Login,
        }
    }
}

/// Error returned when parsing an unknown rejected-login route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rejected login route `{0}`; expected `user-upload` or `login`")]
pub struct ParseRejectedLoginRouteError(String);

impl FromStr for RejectedLoginRoute {
    type Err = ParseRejectedLoginRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user-upload" | "user_upload" => Ok(Self::UserUpload),
            "login" => Ok(Self::Login),
            other => Err(ParseRejectedLoginRouteError(other.to_owned())),
        }
    }
}

/// Result of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted.
    Authenticated {
        /// Username to record in the session.
        username: String,
    },
    /// Credentials refused; the user can correct them.
    Rejected {
        /// Route configured for rejected attempts.
        destination: Destination,
    },
    /// The authentication collaborator could not answer.
    Unavailable {
        /// Human-readable cause for logs and the error payload.
        reason: String,
        /// Whether retrying shortly is expected to help.
        retryable: bool,
    },
}

impl LoginOutcome {
    /// Route the client should navigate to.
    pub fn destination(&self) -> Destination {
        match self {
            Self::Authenticated { .. } => Destination::KycDashboard,
            Self::Rejected { destination } => *destination,
            Self::Unavailable { .. } => Destination::Login,
        }
    }

    /// Whether the login form should show its failure state.
    pub fn login_failed(&self) -> bool {
        !matches!(self, Self::Authenticated { .. })
    }
}

/// Use-case service deciding where a login attempt leads.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use kyc_portal::domain::ports::FixtureLoginService;
/// use kyc_portal::domain::{Destination, LoginCredentials, LoginRedirector, RejectedLoginRoute};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let redirector = LoginRedirector::new(Arc::new(FixtureLoginService), RejectedLoginRoute::default());
/// let outcome = redirector
///     .attempt_login(&LoginCredentials::new("admin", "password"))
///     .await;
/// assert_eq!(outcome.destination(), Destination::KycDashboard);
/// # });
/// ```
#[derive(Clone)]
pub struct LoginRedirector {
    service: Arc<dyn LoginService>,
    rejected_route: RejectedLoginRoute,
}

impl LoginRedirector {
    /// Build a redirector over an authentication port.
    pub fn new(service: Arc<dyn LoginService>, rejected_route: RejectedLoginRoute) -> Self {
        Self {
            service,
            rejected_route,
        }
    }

    /// Check the credentials once and pick the next route.
    pub async fn attempt_login(&self, credentials: &LoginCredentials) -> LoginOutcome {
        match self.service.login(credentials).await {
            Ok(true) => {
                info!(username = credentials.username(), "login accepted");
                LoginOutcome::Authenticated {
                    username: credentials.username().to_owned(),
                }
            }
            Ok(false) => {
                let destination = self.rejected_route.destination();
                info!(
                    username = credentials.username(),
                    destination = %destination,
                    "login rejected"
                );
                LoginOutcome::Rejected { destination }
            }
            Err(error) => {
                warn!(
                    username = credentials.username(),
                    %error,
                    "authentication service did not answer"
                );
                LoginOutcome::Unavailable {
                    reason: error.to_string(),
                    retryable: error.is_retryable(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{LoginServiceError, MockLoginService};
    use rstest::rstest;

    fn redirector_answering(
        answer: Result<bool, LoginServiceError>,
        rejected_route: RejectedLoginRoute,
    ) -> LoginRedirector {
        let mut service = MockLoginService::new();
        service
            .expect_login()
            .times(1)
            .return_once(move |_| answer);
        LoginRedirector::new(Arc::new(service), rejected_route)
    }

    #[rstest]
    #[case("officer", "s3cret")]
    #[case("", "")]
    #[tokio::test]
    async fn accepted_credentials_go_to_dashboard(#[case] username: &str, #[case] password: &str) {
        let redirector = redirector_answering(Ok(true), RejectedLoginRoute::default());
        let outcome = redirector
            .attempt_login(&LoginCredentials::new(username, password))
            .await;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                username: username.to_owned()
            }
        );
        assert_eq!(outcome.destination().path(), "/kyc-dashboard");
        assert!(!outcome.login_failed());
    }

    /// Rejected logins land on the upload page. This mirrors the portal as it
    /// ships today and is asserted explicitly so a change is deliberate.
    #[tokio::test]
    async fn rejected_credentials_go_to_upload_page_by_default() {
        let redirector = redirector_answering(Ok(false), RejectedLoginRoute::default());
        let outcome = redirector
            .attempt_login(&LoginCredentials::new("admin", "wrong"))
            .await;

        assert_eq!(outcome.destination().path(), "/user-upload");
        assert!(outcome.login_failed());
    }

    #[tokio::test]
    async fn rejected_credentials_can_stay_on_login() {
        let redirector = redirector_answering(Ok(false), RejectedLoginRoute::Login);
        let outcome = redirector
            .attempt_login(&LoginCredentials::new("admin", "wrong"))
            .await;

        assert_eq!(outcome.destination(), Destination::Login);
    }

    #[rstest]
    #[case(LoginServiceError::unavailable("connection refused"), true)]
    #[case(LoginServiceError::timeout("after 10s"), true)]
    #[case(LoginServiceError::misconfigured("bad digest"), false)]
    #[tokio::test]
    async fn collaborator_failures_stay_on_login(
        #[case] error: LoginServiceError,
        #[case] expected_retryable: bool,
    ) {
        let expected_reason = error.to_string();
        let redirector = redirector_answering(Err(error), RejectedLoginRoute::default());
        let outcome = redirector
            .attempt_login(&LoginCredentials::new("admin", "password"))
            .await;

        assert_eq!(
            outcome,
            LoginOutcome::Unavailable {
                reason: expected_reason,
                retryable: expected_retryable,
            }
        );
        assert_eq!(outcome.destination(), Destination::Login);
        assert!(outcome.login_failed());
    }

    #[rstest]
    #[case("user-upload", RejectedLoginRoute::UserUpload)]
    #[case("USER_UPLOAD", RejectedLoginRoute::UserUpload)]
    #[case(" login ", RejectedLoginRoute::Login)]
    fn parses_rejected_login_routes(#[case] raw: &str, #[case] expected: RejectedLoginRoute) {
        assert_eq!(raw.parse::<RejectedLoginRoute>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_rejected_login_route() {
        assert!("dashboard".parse::<RejectedLoginRoute>().is_err());
    }
}
