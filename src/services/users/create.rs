use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::context::{Reply, bad_request, internal_error, storage_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> Reply {
    user_data.username = user_data.username.trim().to_string();
    user_data.email = user_data.email.trim().to_lowercase();

    validate_username(&user_data.username)
        .map_err(|msg| bad_request(ErrorCode::UserNameInvalid, msg))?;
    validate_email(&user_data.email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;
    validate_password_simple(&user_data.password)
        .map_err(|msg| bad_request(ErrorCode::UserPasswordInvalid, msg))?;

    let storage = service.get_storage(request)?;

    // 存储层只接受哈希后的密码
    user_data.password = hash_password(&user_data.password)
        .map_err(|e| internal_error(format!("Password hashing failed: {e}")))?;

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} ({}) created", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
        }
        Err(e) => Err(storage_error(
            "User creation failed",
            &e,
            ErrorCode::UserAlreadyExists,
        )),
    }
}
