use actix_web::{HttpRequest, HttpResponse};

use super::SubjectService;
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::requests::{SubjectListParams, SubjectListQuery},
};
use crate::services::context::{Reply, paginate, storage_error};

pub async fn list_subjects(
    service: &SubjectService,
    query: SubjectListParams,
    request: &HttpRequest,
) -> Reply {
    let storage = service.get_storage(request)?;

    let mut list_query = SubjectListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_subjects_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve subjects", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Subject list retrieved successfully",
    )))
}
