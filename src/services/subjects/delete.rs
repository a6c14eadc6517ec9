use actix_web::{HttpRequest, HttpResponse};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, not_found, storage_error};

pub async fn delete_subject(service: &SubjectService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;

    match storage.delete_subject(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Err(storage_error("Subject deletion failed", &e, ErrorCode::Conflict)),
    }
}
