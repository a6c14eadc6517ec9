use actix_web::{HttpRequest, HttpResponse};

use super::{GradeService, gradable_subject};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{
    Reply, current_user, found, not_found, storage_error, teacher_scope,
};

pub async fn delete_grade(service: &GradeService, id: i64, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_grade_by_id(id).await,
        "Grade",
        ErrorCode::GradeNotFound,
    )?;

    let teacher = teacher_scope(&storage, &user).await?;
    gradable_subject(&storage, teacher.as_ref(), existing.subject_id).await?;

    match storage.delete_grade(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Err(storage_error("Grade deletion failed", &e, ErrorCode::Conflict)),
    }
}
