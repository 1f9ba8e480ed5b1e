//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ChatService, CustomerSource, LoginService};
use crate::domain::{CustomerResumeLinks, LoginRedirector, RejectedLoginRoute};

/// Parameter object bundling the port implementations chosen at startup.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Authenticator for officer logins.
    pub login: Arc<dyn LoginService>,
    /// Source of the customer listing.
    pub customers: Arc<dyn CustomerSource>,
    /// Chatbot relay.
    pub chat: Arc<dyn ChatService>,
    /// Where rejected logins are sent.
    pub rejected_login_route: RejectedLoginRoute,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login use case.
    pub login: LoginRedirector,
    /// Customer resume-link use case.
    pub resume_links: CustomerResumeLinks,
    /// Chatbot relay.
    pub chat: Arc<dyn ChatService>,
}

impl HttpState {
    /// Wrap the ports in their use-case services.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            customers,
            chat,
            rejected_login_route,
        } = ports;
        Self {
            login: LoginRedirector::new(login, rejected_login_route),
            resume_links: CustomerResumeLinks::new(customers),
            chat,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
