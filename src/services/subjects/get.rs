use actix_web::{HttpRequest, HttpResponse};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, found};

pub async fn get_subject(service: &SubjectService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let subject = found(
        storage.get_subject_by_id(id).await,
        "Subject",
        ErrorCode::SubjectNotFound,
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "Subject retrieved successfully")))
}
