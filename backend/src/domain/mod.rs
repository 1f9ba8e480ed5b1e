//! Domain primitives, use-case services, and ports.
//!
//! Purpose: hold the portal's business rules (login routing and resume-link
//! derivation) free of HTTP and transport concerns. Inbound adapters call the
//! services here; outbound adapters implement the ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - LoginCredentials, LoginRedirector, LoginOutcome, Destination: login flow.
//! - CustomerRecord, KycCaseRef, ResumeLink, CustomerResumeLinks: resume links.
//! - ChatPrompt, ChatReply: chat relay values.

pub mod auth;
pub mod chat;
pub mod customer;
pub mod customer_links_service;
pub mod error;
pub mod login;
pub mod ports;
pub mod resume_link;
pub mod trace_id;

pub use self::auth::LoginCredentials;
pub use self::chat::{ChatPrompt, ChatReply, ChatValidationError};
pub use self::customer::{CustomerRecord, KycCaseRef, KycIdentifier, MISSING_FIELD_PLACEHOLDER};
pub use self::customer_links_service::CustomerResumeLinks;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::login::{
    Destination, LoginOutcome, LoginRedirector, ParseRejectedLoginRouteError, RejectedLoginRoute,
};
pub use self::resume_link::{
    CustomerResumeLink, RESUME_ROUTE_PREFIX, ResumeLink, is_resumable,
    map_customers_to_resume_links,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
