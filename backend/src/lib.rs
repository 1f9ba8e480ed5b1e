//! KYC portal backend: officer login routing, customer resume links, and a
//! chat relay behind a small REST API.
//!
//! - [`domain`]: business rules and ports, free of transport concerns.
//! - [`outbound`]: reqwest adapters for the KYC backend and chatbot.
//! - [`inbound`]: actix-web handlers, sessions, and error mapping.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
