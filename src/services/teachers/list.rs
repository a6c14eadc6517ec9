use actix_web::{HttpRequest, HttpResponse};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};
use crate::services::context::{Reply, paginate, storage_error};

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> Reply {
    let storage = service.get_storage(request)?;

    let mut list_query = TeacherListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_teachers_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve teachers", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Teacher list retrieved successfully",
    )))
}
