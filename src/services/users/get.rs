use actix_web::{HttpRequest, HttpResponse};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::responses::UserDetailResponse};
use crate::services::context::{Reply, found, linked_profile_ids};

/// 账号详情，附带关联的档案，方便管理员核对绑定关系
pub async fn get_user(service: &UserService, user_id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let user = found(
        storage.get_user_by_id(user_id).await,
        "User",
        ErrorCode::UserNotFound,
    )?;
    let (teacher_id, student_id) = linked_profile_ids(&storage, &user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UserDetailResponse {
            user,
            teacher_id,
            student_id,
        },
        "User information retrieved successfully",
    )))
}
