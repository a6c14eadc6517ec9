use actix_web::{HttpRequest, HttpResponse};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, not_found, storage_error};

pub async fn delete_event(service: &EventService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;

    match storage.delete_event(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::EventNotFound, "Event not found")),
        Err(e) => Err(storage_error("Event deletion failed", &e, ErrorCode::Conflict)),
    }
}
