//! Login and logout handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"admin","password":"password"}
//! POST /api/v1/logout
//! ```
//!
//! Navigation is returned to the client as a `destination` path rather than
//! an HTTP redirect so the single-page frontend keeps control of routing.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Destination, Error, LoginCredentials, LoginOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
///
/// Blank fields are not rejected here; the authentication service decides.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Operator username.
    #[schema(example = "admin")]
    pub username: String,
    /// Operator password.
    #[schema(example = "password")]
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(value: LoginRequest) -> Self {
        Self::new(value.username, value.password)
    }
}

/// Where the client should go after a login or logout.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    /// Frontend route to navigate to.
    #[schema(example = "/kyc-dashboard")]
    pub destination: String,
    /// Whether a session was established.
    pub authenticated: bool,
    /// Whether the login form should show its failure state.
    pub login_failed: bool,
}

impl NavigationResponse {
    fn to(destination: Destination, authenticated: bool, login_failed: bool) -> Self {
        Self {
            destination: destination.path().to_owned(),
            authenticated,
            login_failed,
        }
    }
}

/// Check credentials once and tell the client where to go next.
///
/// Accepted credentials start a session and lead to the KYC dashboard.
/// Refused credentials lead to the configured rejected-login route. When the
/// authentication service cannot answer the response is `503` and the client
/// stays on the login page.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login decided", body = NavigationResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 503, description = "Authentication service unavailable", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<NavigationResponse>> {
    let credentials = LoginCredentials::from(payload.into_inner());
    let outcome = state.login.attempt_login(&credentials).await;
    let destination = outcome.destination();
    match outcome {
        LoginOutcome::Authenticated { username } => {
            session.persist_username(&username)?;
            Ok(web::Json(NavigationResponse::to(destination, true, false)))
        }
        LoginOutcome::Rejected { .. } => {
            session.purge();
            Ok(web::Json(NavigationResponse::to(destination, false, true)))
        }
        LoginOutcome::Unavailable { reason, retryable } => {
            Err(
                Error::service_unavailable("authentication service is unavailable").with_details(
                    json!({
                        "destination": destination.path(),
                        "retryable": retryable,
                        "reason": reason,
                    }),
                ),
            )
        }
    }
}

/// End the session and send the client back to the login page.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Session ended", body = NavigationResponse)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> web::Json<NavigationResponse> {
    session.purge();
    web::Json(NavigationResponse::to(Destination::Login, false, false))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::RejectedLoginRoute;
    use crate::domain::ports::{LoginServiceError, MockLoginService};
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::{fixture_ports, fixture_state, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    fn app_with(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(web::scope("/api/v1").service(login).service(logout))
    }

    fn state_answering(answer: Result<bool, LoginServiceError>) -> HttpState {
        let mut service = MockLoginService::new();
        service.expect_login().times(1).return_const(answer);
        HttpState::new(HttpStatePorts {
            login: Arc::new(service),
            ..fixture_ports()
        })
    }

    fn login_request(username: &str, password: &str) -> actix_http::Request {
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                username: username.into(),
                password: password.into(),
            })
            .to_request()
    }

    #[actix_web::test]
    async fn accepted_login_sets_session_and_targets_dashboard() {
        let app = actix_test::init_service(app_with(fixture_state())).await;

        let response = actix_test::call_service(&app, login_request("admin", "password")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .response()
                .cookies()
                .any(|cookie| cookie.name() == "session")
        );
        let body: NavigationResponse = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            NavigationResponse {
                destination: "/kyc-dashboard".to_owned(),
                authenticated: true,
                login_failed: false,
            }
        );
    }

    #[rstest]
    #[case(RejectedLoginRoute::UserUpload, "/user-upload")]
    #[case(RejectedLoginRoute::Login, "/login")]
    #[actix_web::test]
    async fn refused_login_targets_configured_route(
        #[case] route: RejectedLoginRoute,
        #[case] expected: &str,
    ) {
        let state = HttpState::new(HttpStatePorts {
            rejected_login_route: route,
            ..fixture_ports()
        });
        let app = actix_test::init_service(app_with(state)).await;

        let response = actix_test::call_service(&app, login_request("admin", "wrong")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: NavigationResponse = actix_test::read_body_json(response).await;
        assert_eq!(body.destination, expected);
        assert!(!body.authenticated);
        assert!(body.login_failed);
    }

    #[actix_web::test]
    async fn unavailable_service_keeps_client_on_login() {
        let state = state_answering(Err(LoginServiceError::unavailable("connection refused")));
        let app = actix_test::init_service(app_with(state)).await;

        let response = actix_test::call_service(&app, login_request("admin", "password")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("service_unavailable")
        );
        let details = body.get("details").expect("details present");
        assert_eq!(
            details.get("destination").and_then(Value::as_str),
            Some("/login")
        );
        assert_eq!(
            details.get("retryable").and_then(Value::as_bool),
            Some(true)
        );
    }

    #[actix_web::test]
    async fn logout_targets_login_page() {
        let app = actix_test::init_service(app_with(fixture_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: NavigationResponse = actix_test::read_body_json(response).await;
        assert_eq!(body.destination, "/login");
        assert!(!body.authenticated);
    }
}
