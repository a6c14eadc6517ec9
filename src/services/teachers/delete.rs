use actix_web::{HttpRequest, HttpResponse};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, not_found, storage_error};

pub async fn delete_teacher(service: &TeacherService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;

    match storage.delete_teacher(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Err(storage_error("Teacher deletion failed", &e, ErrorCode::Conflict)),
    }
}
