use actix_web::{HttpRequest, HttpResponse};

use super::ClassService;
use crate::models::classes::requests::{ClassListQuery, ClassQueryParams};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, paginate, storage_error};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> Reply {
    let storage = service.get_storage(request)?;

    let mut list_query = ClassListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_classes_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve classes", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Class list retrieved successfully",
    )))
}
