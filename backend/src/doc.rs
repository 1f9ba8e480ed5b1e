//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the portal (auth, customers,
//! chat, health), the error envelope, and the session cookie security scheme.
//! The document is served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump` for frontend tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::chat::{ChatRequest, ChatResponse};
use crate::inbound::http::customers::{
    CustomerResponse, CustomerResumeLinkResponse, IdentifierResponse,
};
use crate::inbound::http::health::{Phase, ProbeReport};
use crate::inbound::http::login::{LoginRequest, NavigationResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the portal API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "KYC portal API",
        description = "Officer login, customer resume links, chat relay, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::login::logout,
        crate::inbound::http::customers::list_resume_links,
        crate::inbound::http::chat::send_chat_message,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        LoginRequest,
        NavigationResponse,
        IdentifierResponse,
        CustomerResponse,
        CustomerResumeLinkResponse,
        ChatRequest,
        ChatResponse,
        Phase,
        ProbeReport,
    )),
    tags(
        (name = "auth", description = "Officer login and logout"),
        (name = "customers", description = "Customer listing with KYC resume links"),
        (name = "chat", description = "Chatbot relay"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
