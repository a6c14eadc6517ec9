use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode, announcements::requests::CreateAnnouncementRequest};
use crate::services::context::{Reply, bad_request, current_user, storage_error};
use crate::utils::validate::validate_required;

pub async fn create_announcement(
    service: &AnnouncementService,
    data: CreateAnnouncementRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    validate_required("title", &data.title)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    if data.content.trim().is_empty() {
        return Err(bad_request(ErrorCode::ValidationFailed, "content must not be empty"));
    }
    if let (Some(published), Some(expires)) = (data.published_at, data.expires_at)
        && expires <= published
    {
        return Err(bad_request(
            ErrorCode::ValidationFailed,
            "expires_at must be after published_at",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.create_announcement(user.id, data).await {
        Ok(announcement) => {
            info!("Announcement {} published by {}", announcement.id, user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created successfully",
            )))
        }
        Err(e) => Err(storage_error("Announcement creation failed", &e, ErrorCode::Conflict)),
    }
}
