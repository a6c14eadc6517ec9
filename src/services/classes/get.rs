use actix_web::{HttpRequest, HttpResponse};

use super::ClassService;
use crate::models::classes::responses::ClassDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, found, storage_error};

pub async fn get_class(service: &ClassService, request: &HttpRequest, class_id: i64) -> Reply {
    let storage = service.get_storage(request)?;

    let class = found(
        storage.get_class_by_id(class_id).await,
        "Class",
        ErrorCode::ClassNotFound,
    )?;
    let student_count = storage
        .count_students_in_class(class_id)
        .await
        .map_err(|e| storage_error("Failed to count students", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassDetailResponse {
            class,
            student_count: student_count as i64,
        },
        "Class information retrieved successfully",
    )))
}
