use actix_web::{HttpRequest, HttpResponse};

use super::TeacherService;
use super::create::check_linked_account;
use crate::models::{
    ApiResponse, ErrorCode, teachers::requests::UpdateTeacherRequest, users::entities::UserRole,
};
use crate::services::context::{Reply, bad_request, not_found, storage_error};
use crate::utils::validate::{validate_email, validate_required};

pub async fn update_teacher(
    service: &TeacherService,
    id: i64,
    mut data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> Reply {
    if let Some(first_name) = &data.first_name {
        validate_required("first_name", first_name)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if let Some(last_name) = &data.last_name {
        validate_required("last_name", last_name)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if let Some(email) = data.email.as_mut() {
        *email = email.trim().to_lowercase();
        validate_email(email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;
    }

    let storage = service.get_storage(request)?;
    if let Some(user_id) = data.user_id {
        check_linked_account(&storage, user_id, UserRole::Teacher).await?;
    }

    match storage.update_teacher(id, data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Err(storage_error(
            "Teacher update failed",
            &e,
            ErrorCode::TeacherAlreadyExists,
        )),
    }
}
