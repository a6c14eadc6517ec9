use actix_web::{HttpRequest, HttpResponse};
use chrono::Utc;

use super::AnnouncementService;
use crate::models::{
    ApiResponse, ErrorCode, announcements::entities::Audience, users::entities::UserRole,
};
use crate::services::context::{Reply, current_user, found, not_found};

pub async fn get_announcement(
    service: &AnnouncementService,
    id: i64,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let announcement = found(
        storage.get_announcement_by_id(id).await,
        "Announcement",
        ErrorCode::AnnouncementNotFound,
    )?;

    // 对不可见的公告返回 404，不暴露其存在
    let visible = user.role == UserRole::Admin
        || announcement.author_id == user.id
        || (Audience::visible_to(user.role).contains(&announcement.audience)
            && announcement.is_active_at(Utc::now()));
    if !visible {
        return Err(not_found(ErrorCode::AnnouncementNotFound, "Announcement not found"));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        announcement,
        "Announcement retrieved successfully",
    )))
}
