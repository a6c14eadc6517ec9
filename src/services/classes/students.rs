use actix_web::{HttpRequest, HttpResponse};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, found, storage_error};

pub async fn list_students(service: &ClassService, request: &HttpRequest, class_id: i64) -> Reply {
    let storage = service.get_storage(request)?;
    found(
        storage.get_class_by_id(class_id).await,
        "Class",
        ErrorCode::ClassNotFound,
    )?;

    let students = storage
        .list_students_by_class(class_id)
        .await
        .map_err(|e| storage_error("Failed to retrieve students", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        students,
        "Class students retrieved successfully",
    )))
}
