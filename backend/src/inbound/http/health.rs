//! Liveness and readiness probes for orchestrators and load balancers.
//!
//! The portal moves through three phases: `starting` until the listener is
//! bound, `serving` while it accepts traffic, and `draining` once the server
//! future resolves. Readiness holds only while serving; liveness fails only
//! while draining. Neither probe calls the customer backend or the chatbot.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Process is up but not yet listening.
    Starting,
    /// Listener bound and accepting traffic.
    Serving,
    /// Shutting down; stop routing here.
    Draining,
}

impl Phase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Probe response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeReport {
    /// Current lifecycle phase.
    pub phase: Phase,
}

/// Lifecycle phase shared between the server and its probes.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Create a state in the `starting` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `serving`. Has no effect once draining has begun.
    pub fn mark_ready(&self) {
        let _ = self.phase.compare_exchange(
            Phase::Starting as u8,
            Phase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter `draining`; both probes report 503 from here on.
    pub fn mark_draining(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::from_raw(self.phase.load(Ordering::Acquire))
    }

    fn report(phase: Phase, healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeReport { phase })
    }
}

/// Readiness probe: `200` while serving, `503` otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Accepting traffic", body = ProbeReport),
        (status = 503, description = "Starting or draining", body = ProbeReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    HealthState::report(phase, phase == Phase::Serving)
}

/// Liveness probe: `200` until draining begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Process is alive", body = ProbeReport),
        (status = 503, description = "Draining", body = ProbeReport)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    HealthState::report(phase, phase != Phase::Draining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn probe(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = test::read_body_json(response).await;
        (status, cache, body)
    }

    fn state_in(phase: Phase) -> web::Data<HealthState> {
        let state = web::Data::new(HealthState::new());
        match phase {
            Phase::Starting => {}
            Phase::Serving => state.mark_ready(),
            Phase::Draining => {
                state.mark_ready();
                state.mark_draining();
            }
        }
        state
    }

    #[rstest]
    #[case(Phase::Starting, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, "starting")]
    #[case(Phase::Serving, "/health/ready", StatusCode::OK, "serving")]
    #[case(Phase::Draining, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, "draining")]
    #[case(Phase::Starting, "/health/live", StatusCode::OK, "starting")]
    #[case(Phase::Serving, "/health/live", StatusCode::OK, "serving")]
    #[case(Phase::Draining, "/health/live", StatusCode::SERVICE_UNAVAILABLE, "draining")]
    #[actix_web::test]
    async fn probes_follow_phase(
        #[case] phase: Phase,
        #[case] uri: &str,
        #[case] expected: StatusCode,
        #[case] reported: &str,
    ) {
        let (status, cache, body) = probe(state_in(phase), uri).await;
        assert_eq!(status, expected);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert_eq!(body, json!({ "phase": reported }));
    }

    #[core::prelude::v1::test]
    fn draining_is_not_undone_by_late_ready() {
        let state = HealthState::new();
        state.mark_draining();
        state.mark_ready();
        assert_eq!(state.phase(), Phase::Draining);
    }
}
