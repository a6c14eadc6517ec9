use actix_web::{HttpRequest, HttpResponse};

use super::{AnnouncementService, ensure_can_modify};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, current_user, found, not_found, storage_error};

pub async fn delete_announcement(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_announcement_by_id(id).await,
        "Announcement",
        ErrorCode::AnnouncementNotFound,
    )?;
    ensure_can_modify(&user, &existing)?;

    match storage.delete_announcement(id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Announcement deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::AnnouncementNotFound, "Announcement not found")),
        Err(e) => Err(storage_error("Announcement deletion failed", &e, ErrorCode::Conflict)),
    }
}
