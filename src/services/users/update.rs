use actix_web::{HttpRequest, HttpResponse};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::requests::UpdateUserRequest};
use crate::services::context::{
    Reply, bad_request, current_user, forget_cached_user, internal_error, not_found, storage_error,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> Reply {
    let current = current_user(request)?;

    // 管理员不能修改自己的角色或停用自己
    if current.id == user_id && (update_data.role.is_some() || update_data.status.is_some()) {
        return Err(bad_request(
            ErrorCode::BadRequest,
            "Cannot change your own role or status",
        ));
    }

    if let Some(email) = update_data.email.as_mut() {
        *email = email.trim().to_lowercase();
        validate_email(email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;
    }

    if let Some(password) = update_data.password.take() {
        validate_password_simple(&password)
            .map_err(|msg| bad_request(ErrorCode::UserPasswordInvalid, msg))?;
        let hash = hash_password(&password)
            .map_err(|e| internal_error(format!("Password hashing failed: {e}")))?;
        update_data.password = Some(hash);
    }

    let storage = service.get_storage(request)?;
    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            forget_cached_user(request, user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User information updated successfully",
            )))
        }
        Ok(None) => Err(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Err(storage_error(
            "User update failed",
            &e,
            ErrorCode::UserAlreadyExists,
        )),
    }
}
