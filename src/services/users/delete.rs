use actix_web::{HttpRequest, HttpResponse};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{
    Reply, bad_request, current_user, forget_cached_user, not_found, storage_error,
};

pub async fn delete_user(service: &UserService, user_id: i64, request: &HttpRequest) -> Reply {
    let current = current_user(request)?;
    if current.id == user_id {
        return Err(bad_request(
            ErrorCode::CanNotDeleteCurrentUser,
            "Cannot delete current user",
        ));
    }

    let storage = service.get_storage(request)?;
    match storage.delete_user(user_id).await {
        Ok(true) => {
            forget_cached_user(request, user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Err(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Err(storage_error("User deletion failed", &e, ErrorCode::Conflict)),
    }
}
