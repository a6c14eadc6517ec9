use actix_web::{HttpRequest, HttpResponse};
use tracing::{error, info};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::UserStatus,
};
use crate::services::context::{Reply, internal_error, storage_error};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Username or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> Reply {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let identifier = login_request.identifier.trim();
    let user = match storage.get_user_by_username_or_email(identifier).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(invalid_credentials()),
        Err(e) => return Err(storage_error("Login failed", &e, ErrorCode::Conflict)),
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        info!("Failed login attempt for {}", identifier);
        return Err(invalid_credentials());
    }

    if user.status != UserStatus::Active {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            format!("Account is {}", user.status),
        )));
    }

    // 登录时间更新失败不影响登录
    if let Err(e) = storage.update_last_login(user.id).await {
        error!("Failed to update last login for {}: {}", user.id, e);
    }

    let refresh_days = if login_request.remember_me {
        config.jwt.refresh_token_remember_me_expiry
    } else {
        config.jwt.refresh_token_expiry
    };

    let token_pair = user
        .generate_token_pair(Some(chrono::Duration::days(refresh_days)))
        .map_err(|e| {
            error!("Failed to generate JWT token: {}", e);
            internal_error("Login failed, unable to generate token")
        })?;

    info!("User {} logged in successfully", user.username);

    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_days);
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: JwtUtils::access_token_ttl_secs(),
        user,
        issued_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
