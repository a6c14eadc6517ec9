use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
};
use crate::services::context::{Reply, paginate, storage_error};

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> Reply {
    let storage = service.get_storage(request)?;

    let mut list_query = StudentListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_students_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve students", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student list retrieved successfully",
    )))
}
