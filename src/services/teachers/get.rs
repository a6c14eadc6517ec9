use actix_web::{HttpRequest, HttpResponse};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, current_user, found, teacher_profile};

pub async fn get_teacher(service: &TeacherService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let teacher = found(
        storage.get_teacher_by_id(id).await,
        "Teacher",
        ErrorCode::TeacherNotFound,
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "Teacher retrieved successfully")))
}

pub async fn get_me(service: &TeacherService, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let teacher = teacher_profile(&storage, &user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "Teacher retrieved successfully")))
}
