//! Liveness and readiness probes.
//!
//! Readiness flips once the server has bound its listener. The readiness body
//! names the adapters the process runs with, so operators can spot a server
//! that fell back to the in-memory contact store or has avatars disabled.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Contact store the server was wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactsBackend {
    Postgres,
    InMemory,
}

/// Avatar store the server was wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AvatarBackend {
    ObjectStorage,
    Disabled,
}

/// Readiness body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthReport {
    pub contacts: ContactsBackend,
    pub avatars: AvatarBackend,
}

/// Probe state shared between the server loop and the handlers.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    report: HealthReport,
}

impl HealthState {
    /// Not ready, alive.
    pub fn new(report: HealthReport) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            report,
        }
    }

    /// Start answering readiness probes with 200.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the server has finished starting.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether liveness probes should pass.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Adapters chosen at startup.
    pub fn report(&self) -> HealthReport {
        self.report
    }
}

fn probe(ok: bool) -> actix_web::HttpResponseBuilder {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response.insert_header((header::CACHE_CONTROL, "no-store"));
    response
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving traffic", body = HealthReport),
        (status = 503, description = "Still starting", body = HealthReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_ready()).json(state.report())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process alive"),
        (status = 503, description = "Shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_alive()).finish()
}
