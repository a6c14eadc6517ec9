use actix_web::{HttpRequest, HttpResponse};

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::requests::{AssignmentListParams, AssignmentListQuery},
};
use crate::services::context::{Reply, current_user, paginate, storage_error, teacher_scope};

pub async fn list_assignments(
    service: &AssignmentService,
    query: AssignmentListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;

    let mut list_query = AssignmentListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);
    if let Some(teacher) = teacher_scope(&storage, &user).await? {
        list_query.teacher_id = Some(teacher.id);
    }

    let response = storage
        .list_assignments_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve assignments", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Assignments retrieved successfully",
    )))
}
