use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::{SubjectService, validate_credits};
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};
use crate::services::classes::create::ensure_teacher_exists;
use crate::services::context::{Reply, bad_request, storage_error};
use crate::utils::validate::{validate_code, validate_required};

pub async fn create_subject(
    service: &SubjectService,
    mut data: CreateSubjectRequest,
    request: &HttpRequest,
) -> Reply {
    data.code = data.code.trim().to_uppercase();

    validate_code("code", &data.code)
        .and_then(|_| validate_required("name", &data.name))
        .and_then(|_| data.credits.map_or(Ok(()), validate_credits))
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;

    let storage = service.get_storage(request)?;
    if let Some(teacher_id) = data.teacher_id {
        ensure_teacher_exists(&storage, teacher_id).await?;
    }

    match storage.create_subject(data).await {
        Ok(subject) => {
            info!("Subject {} created", subject.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => Err(storage_error(
            "Subject creation failed",
            &e,
            ErrorCode::SubjectAlreadyExists,
        )),
    }
}
