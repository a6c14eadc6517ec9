use actix_web::{HttpRequest, HttpResponse};

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::services::context::{Reply, forget_cached_user};
use crate::utils::jwt::JwtUtils;

/// 清除 refresh token cookie 与服务端的用户缓存
pub async fn handle_logout(request: &HttpRequest) -> Reply {
    if let Some(user_id) = RequireJWT::extract_user_id(request) {
        forget_cached_user(request, user_id).await;
    }

    Ok(HttpResponse::Ok()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::<()>::success_empty("Logged out")))
}
