use actix_web::{HttpRequest, HttpResponse};

use super::{AssignmentService, owned_assignment};
use crate::models::{ApiResponse, ErrorCode, assignments::requests::UpdateAssignmentRequest};
use crate::services::context::{
    Reply, bad_request, current_user, found, not_found, storage_error,
};
use crate::utils::validate::{validate_required, validate_score};

pub async fn update_assignment(
    service: &AssignmentService,
    id: i64,
    data: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    if let Some(title) = &data.title {
        validate_required("title", title)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }
    if let Some(max_score) = data.max_score {
        validate_score(0.0, max_score)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    owned_assignment(&storage, &user, id).await?;

    if let Some(subject_id) = data.subject_id {
        found(
            storage.get_subject_by_id(subject_id).await,
            "Subject",
            ErrorCode::SubjectNotFound,
        )?;
    }

    match storage.update_assignment(id, data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Err(not_found(ErrorCode::AssignmentNotFound, "Assignment not found")),
        Err(e) => Err(storage_error("Assignment update failed", &e, ErrorCode::Conflict)),
    }
}
