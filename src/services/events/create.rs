use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, events::requests::CreateEventRequest};
use crate::services::context::{Reply, bad_request, current_user, storage_error};
use crate::utils::validate::{validate_required, validate_time_range};

pub async fn create_event(
    service: &EventService,
    data: CreateEventRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    validate_required("title", &data.title)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    validate_time_range(data.start_at, data.end_at)
        .map_err(|msg| bad_request(ErrorCode::EventRangeInvalid, msg))?;

    let storage = service.get_storage(request)?;
    match storage.create_event(user.id, data).await {
        Ok(event) => {
            info!("Event {} scheduled by {}", event.id, user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(event, "Event created successfully")))
        }
        Err(e) => Err(storage_error("Event creation failed", &e, ErrorCode::Conflict)),
    }
}
