//! Liveness endpoint.

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
    version: &'static str,
    checked_at: DateTime<Utc>,
}

/// GET /api/health
///
/// Process liveness only; no dependency probing happens here.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now(),
    })
}
