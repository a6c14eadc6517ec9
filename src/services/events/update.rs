use actix_web::{HttpRequest, HttpResponse};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, events::requests::UpdateEventRequest};
use crate::services::context::{Reply, bad_request, found, not_found, storage_error};
use crate::utils::validate::{validate_required, validate_time_range};

pub async fn update_event(
    service: &EventService,
    id: i64,
    data: UpdateEventRequest,
    request: &HttpRequest,
) -> Reply {
    if let Some(title) = &data.title {
        validate_required("title", title)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_event_by_id(id).await,
        "Event",
        ErrorCode::EventNotFound,
    )?;

    // 与原值合并后再校验时间区间
    validate_time_range(
        data.start_at.unwrap_or(existing.start_at),
        data.end_at.unwrap_or(existing.end_at),
    )
    .map_err(|msg| bad_request(ErrorCode::EventRangeInvalid, msg))?;

    match storage.update_event(id, data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(event, "Event updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::EventNotFound, "Event not found")),
        Err(e) => Err(storage_error("Event update failed", &e, ErrorCode::Conflict)),
    }
}
