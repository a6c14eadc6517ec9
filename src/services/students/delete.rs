use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, not_found, storage_error};

pub async fn delete_student(service: &StudentService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;

    match storage.delete_student(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Err(storage_error("Student deletion failed", &e, ErrorCode::Conflict)),
    }
}
