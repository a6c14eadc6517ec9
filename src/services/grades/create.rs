use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::{GradeService, gradable_subject};
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{entities::DEFAULT_MAX_SCORE, requests::CreateGradeRequest},
};
use crate::services::context::{
    Reply, bad_request, current_user, found, storage_error, teacher_scope,
};
use crate::utils::validate::{validate_required, validate_score};

pub async fn create_grade(
    service: &GradeService,
    data: CreateGradeRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    validate_required("exam_name", &data.exam_name)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    validate_score(data.score, data.max_score.unwrap_or(DEFAULT_MAX_SCORE))
        .map_err(|msg| bad_request(ErrorCode::GradeScoreInvalid, msg))?;

    let storage = service.get_storage(request)?;
    let teacher = teacher_scope(&storage, &user).await?;

    gradable_subject(&storage, teacher.as_ref(), data.subject_id).await?;
    found(
        storage.get_student_by_id(data.student_id).await,
        "Student",
        ErrorCode::StudentNotFound,
    )?;

    let graded_by = teacher.map(|t| t.id);
    match storage.create_grade(graded_by, data).await {
        Ok(grade) => {
            info!(
                "Grade {} recorded for student {} ({} {})",
                grade.id, grade.student_id, grade.percentage, grade.letter
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade created successfully")))
        }
        Err(e) => Err(storage_error("Grade creation failed", &e, ErrorCode::Conflict)),
    }
}
