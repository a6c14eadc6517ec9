use actix_web::{HttpRequest, HttpResponse};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::requests::{UserListParams, UserListQuery},
};
use crate::services::context::{Reply, paginate, storage_error};

pub async fn list_users(
    service: &UserService,
    query: UserListParams,
    request: &HttpRequest,
) -> Reply {
    let storage = service.get_storage(request)?;

    let mut list_query = UserListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    match storage.list_users_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "User list retrieved successfully",
        ))),
        Err(e) => Err(storage_error(
            "Failed to retrieve user list",
            &e,
            ErrorCode::Conflict,
        )),
    }
}
