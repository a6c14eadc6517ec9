use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use super::create::ensure_class_has_room;
use crate::models::{
    ApiResponse, ErrorCode, students::requests::UpdateStudentRequest, users::entities::UserRole,
};
use crate::services::context::{Reply, bad_request, found, not_found, storage_error};
use crate::services::teachers::create::check_linked_account;
use crate::utils::validate::{validate_email, validate_required};

pub async fn update_student(
    service: &StudentService,
    id: i64,
    mut data: UpdateStudentRequest,
    request: &HttpRequest,
) -> Reply {
    for (field, value) in [("first_name", &data.first_name), ("last_name", &data.last_name)] {
        if let Some(value) = value {
            validate_required(field, value)
                .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
        }
    }
    if let Some(email) = data.email.as_mut() {
        *email = email.trim().to_lowercase();
        validate_email(email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;
    }

    let storage = service.get_storage(request)?;
    let existing = found(
        storage.get_student_by_id(id).await,
        "Student",
        ErrorCode::StudentNotFound,
    )?;

    if let Some(user_id) = data.user_id {
        check_linked_account(&storage, user_id, UserRole::Student).await?;
    }

    // 转班时检查目标班级容量
    if let Some(class_id) = data.class_id
        && existing.class_id != Some(class_id)
    {
        ensure_class_has_room(&storage, class_id).await?;
    }

    match storage.update_student(id, data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "Student updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Err(storage_error(
            "Student update failed",
            &e,
            ErrorCode::StudentAlreadyExists,
        )),
    }
}
