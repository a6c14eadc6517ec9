use actix_web::{HttpRequest, HttpResponse};

use super::AuthService;
use crate::models::{ApiResponse, auth::MeResponse};
use crate::services::context::{Reply, current_user, linked_profile_ids};

pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let (teacher_id, student_id) = linked_profile_ids(&storage, &user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MeResponse {
            user,
            teacher_id,
            student_id,
        },
        "User information retrieved successfully",
    )))
}
