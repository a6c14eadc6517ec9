use actix_web::{HttpRequest, HttpResponse};

use super::{AssignmentService, owned_assignment};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, current_user, not_found, storage_error};

pub async fn delete_assignment(
    service: &AssignmentService,
    id: i64,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    owned_assignment(&storage, &user, id).await?;

    match storage.delete_assignment(id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Assignment deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::AssignmentNotFound, "Assignment not found")),
        Err(e) => Err(storage_error("Assignment deletion failed", &e, ErrorCode::Conflict)),
    }
}
