use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use tracing::warn;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};
use crate::services::context::Reply;

pub async fn health(service: &SystemService, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(Utc::now);

    let database_ok = match storage.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check: database unreachable: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        database: if database_ok { "up" } else { "down" }.to_string(),
        started_at,
        uptime_seconds: Utc::now()
            .signed_duration_since(started_at)
            .num_seconds()
            .max(0),
    };

    let mut builder = if database_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    Ok(builder.json(ApiResponse::success(response, "Health check completed")))
}
