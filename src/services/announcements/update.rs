use actix_web::{HttpRequest, HttpResponse};

use super::{AnnouncementService, ensure_can_modify};
use crate::models::{ApiResponse, ErrorCode, announcements::requests::UpdateAnnouncementRequest};
use crate::services::context::{Reply, bad_request, current_user, found, not_found, storage_error};
use crate::utils::validate::validate_required;

pub async fn update_announcement(
    service: &AnnouncementService,
    id: i64,
    data: UpdateAnnouncementRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    if let Some(title) = &data.title {
        validate_required("title", title)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if data.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
        return Err(bad_request(ErrorCode::ValidationFailed, "content must not be empty"));
    }

    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_announcement_by_id(id).await,
        "Announcement",
        ErrorCode::AnnouncementNotFound,
    )?;
    ensure_can_modify(&user, &existing)?;

    let published = data.published_at.unwrap_or(existing.published_at);
    if let Some(expires) = data.expires_at.or(existing.expires_at)
        && expires <= published
    {
        return Err(bad_request(
            ErrorCode::ValidationFailed,
            "expires_at must be after published_at",
        ));
    }

    match storage.update_announcement(id, data).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcement,
            "Announcement updated successfully",
        ))),
        Ok(None) => Err(not_found(ErrorCode::AnnouncementNotFound, "Announcement not found")),
        Err(e) => Err(storage_error("Announcement update failed", &e, ErrorCode::Conflict)),
    }
}
