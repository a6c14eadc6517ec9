use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, found};

pub async fn get_student(service: &StudentService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let student = found(
        storage.get_student_by_id(id).await,
        "Student",
        ErrorCode::StudentNotFound,
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student retrieved successfully")))
}
