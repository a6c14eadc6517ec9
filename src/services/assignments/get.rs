use actix_web::{HttpRequest, HttpResponse};

use super::{AssignmentService, owned_assignment};
use crate::models::ApiResponse;
use crate::services::context::{Reply, current_user};

pub async fn get_assignment(service: &AssignmentService, id: i64, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let assignment = owned_assignment(&storage, &user, id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        assignment,
        "Assignment retrieved successfully",
    )))
}
