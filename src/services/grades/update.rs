use actix_web::{HttpRequest, HttpResponse};

use super::{GradeService, gradable_subject};
use crate::models::{ApiResponse, ErrorCode, grades::requests::UpdateGradeRequest};
use crate::services::context::{
    Reply, bad_request, current_user, found, not_found, storage_error, teacher_scope,
};
use crate::utils::validate::{validate_required, validate_score};

pub async fn update_grade(
    service: &GradeService,
    id: i64,
    data: UpdateGradeRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    if let Some(exam_name) = &data.exam_name {
        validate_required("exam_name", exam_name)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_grade_by_id(id).await,
        "Grade",
        ErrorCode::GradeNotFound,
    )?;

    let teacher = teacher_scope(&storage, &user).await?;
    gradable_subject(&storage, teacher.as_ref(), existing.subject_id).await?;

    // 合并后的得分与满分必须一致
    validate_score(
        data.score.unwrap_or(existing.score),
        data.max_score.unwrap_or(existing.max_score),
    )
    .map_err(|msg| bad_request(ErrorCode::GradeScoreInvalid, msg))?;

    match storage.update_grade(id, data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Err(storage_error("Grade update failed", &e, ErrorCode::Conflict)),
    }
}
