use actix_web::{HttpRequest, HttpResponse};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, announcements::entities::Audience};
use crate::services::context::{Reply, current_user, found, not_found};

pub async fn get_event(service: &EventService, id: i64, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let event = found(
        storage.get_event_by_id(id).await,
        "Event",
        ErrorCode::EventNotFound,
    )?;

    if !Audience::visible_to(user.role).contains(&event.audience) {
        return Err(not_found(ErrorCode::EventNotFound, "Event not found"));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(event, "Event retrieved successfully")))
}
