use actix_web::{HttpRequest, HttpResponse};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, found, storage_error};

pub async fn list_classes(service: &TeacherService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let teacher = found(
        storage.get_teacher_by_id(id).await,
        "Teacher",
        ErrorCode::TeacherNotFound,
    )?;

    let classes = storage
        .list_classes_by_teacher(teacher.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve classes", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "Classes retrieved successfully")))
}
