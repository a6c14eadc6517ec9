use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode, auth::RefreshTokenResponse, users::entities::UserStatus,
};
use crate::services::context::{Reply, internal_error, storage_error};
use crate::utils::jwt::JwtUtils;

fn login_expired(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::error_empty(ErrorCode::Unauthorized, message))
}

/// 用 cookie 中的 refresh token 换取新的 access token
///
/// 账号被删除或停用后 refresh token 随即失效。
pub async fn handle_refresh_token(service: &AuthService, request: &HttpRequest) -> Reply {
    let refresh_token = JwtUtils::extract_refresh_token_from_cookie(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })?;

    let claims = JwtUtils::verify_refresh_token(&refresh_token).map_err(|e| {
        info!("Refresh token rejected: {}", e);
        login_expired("Login expired or invalid, please login again")
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| login_expired("Login expired or invalid, please login again"))?;

    let storage = service.get_storage(request)?;
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Err(login_expired("Account is no longer available")),
        Err(e) => return Err(storage_error("Token refresh failed", &e, ErrorCode::Conflict)),
    };

    let access_token = JwtUtils::generate_access_token(user.id, &user.role.to_string())
        .map_err(|_| internal_error("Unable to generate token"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RefreshTokenResponse {
            access_token,
            expires_in: JwtUtils::access_token_ttl_secs(),
        },
        "Token refreshed successfully",
    )))
}
