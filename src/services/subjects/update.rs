use actix_web::{HttpRequest, HttpResponse};

use super::{SubjectService, validate_credits};
use crate::models::{ApiResponse, ErrorCode, subjects::requests::UpdateSubjectRequest};
use crate::services::classes::create::ensure_teacher_exists;
use crate::services::context::{Reply, bad_request, not_found, storage_error};
use crate::utils::validate::{validate_code, validate_required};

pub async fn update_subject(
    service: &SubjectService,
    id: i64,
    mut data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> Reply {
    if let Some(code) = data.code.as_mut() {
        *code = code.trim().to_uppercase();
        validate_code("code", code).map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if let Some(name) = &data.name {
        validate_required("name", name)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if let Some(credits) = data.credits {
        validate_credits(credits).map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    if let Some(teacher_id) = data.teacher_id {
        ensure_teacher_exists(&storage, teacher_id).await?;
    }

    match storage.update_subject(id, data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(subject, "Subject updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Err(storage_error(
            "Subject update failed",
            &e,
            ErrorCode::SubjectAlreadyExists,
        )),
    }
}
