use actix_web::{get, web, HttpResponse, Responder};
use derive_more::Display;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

use crate::{constants::START_TIME, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[display("healthy")]
    Healthy,
    #[display("degraded")]
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum DatabaseStatus {
    #[display("OK")]
    #[serde(rename = "OK")]
    Ok,
    #[display("Unavailable")]
    Unavailable,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub status: ServiceStatus,
    pub uptime: String,
    pub timestamp: String,
    pub start_at: String,
    pub database: DatabaseStatus,
    pub version: String,
}

async fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = chrono::Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let database = match state.user_handler.check_connection().await {
        Ok(()) => DatabaseStatus::Ok,
        Err(e) => {
            warn!("Health check could not reach the database: {}", e);
            DatabaseStatus::Unavailable
        }
    };

    let status = match database {
        DatabaseStatus::Ok => ServiceStatus::Healthy,
        DatabaseStatus::Unavailable => ServiceStatus::Degraded,
    };

    HealthCheckResponse {
        status,
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let response = build_health_response(&state).await;

    match response.status {
        ServiceStatus::Healthy => HttpResponse::Ok().json(response),
        ServiceStatus::Degraded => HttpResponse::ServiceUnavailable().json(response),
    }
}
