use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::requests::CreateAssignmentRequest,
    grades::entities::DEFAULT_MAX_SCORE,
};
use crate::services::context::{
    Reply, bad_request, current_user, forbidden, found, storage_error, teacher_scope,
};
use crate::utils::validate::{validate_required, validate_score};

pub async fn create_assignment(
    service: &AssignmentService,
    mut data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    validate_required("title", &data.title)
        .and_then(|_| validate_score(0.0, data.max_score.unwrap_or(DEFAULT_MAX_SCORE)))
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;

    let storage = service.get_storage(request)?;

    // 教师只能以自己的名义布置；管理员必须指明任课教师
    let teacher_id = match teacher_scope(&storage, &user).await? {
        Some(teacher) => {
            if data.teacher_id.is_some_and(|id| id != teacher.id) {
                return Err(forbidden(
                    ErrorCode::Forbidden,
                    "Teachers can only create assignments for themselves",
                ));
            }
            teacher.id
        }
        None => {
            let Some(teacher_id) = data.teacher_id else {
                return Err(bad_request(
                    ErrorCode::ValidationFailed,
                    "teacher_id is required",
                ));
            };
            found(
                storage.get_teacher_by_id(teacher_id).await,
                "Teacher",
                ErrorCode::TeacherNotFound,
            )?;
            teacher_id
        }
    };
    data.teacher_id = Some(teacher_id);

    found(
        storage.get_class_by_id(data.class_id).await,
        "Class",
        ErrorCode::ClassNotFound,
    )?;
    found(
        storage.get_subject_by_id(data.subject_id).await,
        "Subject",
        ErrorCode::SubjectNotFound,
    )?;

    match storage.create_assignment(teacher_id, data).await {
        Ok(assignment) => {
            info!("Assignment {} created by teacher {}", assignment.id, teacher_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(e) => Err(storage_error("Assignment creation failed", &e, ErrorCode::Conflict)),
    }
}
