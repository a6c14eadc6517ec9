//! 各业务服务共用的请求上下文辅助函数
//!
//! 业务函数返回 [`Reply`]：错误分支同样是完整的 HTTP 响应，
//! 因此可以用 `?` 提前返回 401/403/404 等结果。

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::errors::SchoolHubError;
use crate::middlewares::{RequireJWT, require_jwt::user_cache_key};
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery,
    students::entities::Student,
    teachers::entities::Teacher,
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

pub(crate) type Reply = std::result::Result<HttpResponse, HttpResponse>;

pub(crate) fn finish(reply: Reply) -> ActixResult<HttpResponse> {
    Ok(reply.unwrap_or_else(|resp| resp))
}

/// 优先使用服务自带的存储，否则取 app_data 中注册的实例
pub(crate) fn resolve_storage(
    own: Option<&Arc<dyn Storage>>,
    request: &HttpRequest,
) -> Result<Arc<dyn Storage>, HttpResponse> {
    if let Some(storage) = own {
        return Ok(storage.clone());
    }
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not registered in app data");
            internal_error("Storage unavailable")
        })
}

/// 清除用户信息缓存，下次请求时重新从数据库读取
pub(crate) async fn forget_cached_user(request: &HttpRequest, user_id: i64) {
    if let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
        cache.remove(&user_cache_key(user_id)).await;
    }
}

/// 按配置规范化分页参数
pub(crate) fn paginate(pagination: PaginationQuery) -> PaginationQuery {
    let cfg = &AppConfig::get().pagination;
    pagination.normalized(cfg.default_limit, cfg.max_limit)
}

pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user",
        ))
    })
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn conflict(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn internal_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        message,
    ))
}

/// 存储层错误转为响应；唯一约束冲突使用 `conflict_code`
pub(crate) fn storage_error(
    context: &str,
    err: &SchoolHubError,
    conflict_code: ErrorCode,
) -> HttpResponse {
    match err {
        SchoolHubError::Conflict(msg) => conflict(conflict_code, msg.clone()),
        SchoolHubError::Validation(_) | SchoolHubError::DateParse(_) => {
            HttpResponse::BadRequest().json(ApiResponse::from_error(err))
        }
        SchoolHubError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::from_error(err)),
        _ => {
            error!("{context}: {err}");
            internal_error(format!("{context}: {}", err.message()))
        }
    }
}

/// 当前教师账号对应的教师档案
pub(crate) async fn teacher_profile(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<Teacher, HttpResponse> {
    match storage.get_teacher_by_user_id(user.id).await {
        Ok(Some(teacher)) => Ok(teacher),
        Ok(None) => Err(forbidden(
            ErrorCode::TeacherProfileMissing,
            "No teacher profile is linked to this account",
        )),
        Err(e) => Err(storage_error("Failed to load teacher profile", &e, ErrorCode::Conflict)),
    }
}

/// 当前学生账号对应的学生档案
pub(crate) async fn student_profile(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<Student, HttpResponse> {
    match storage.get_student_by_user_id(user.id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(forbidden(
            ErrorCode::StudentProfileMissing,
            "No student profile is linked to this account",
        )),
        Err(e) => Err(storage_error("Failed to load student profile", &e, ErrorCode::Conflict)),
    }
}

/// 账号关联的（教师档案 ID，学生档案 ID），按角色只查其中一个
pub(crate) async fn linked_profile_ids(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<(Option<i64>, Option<i64>), HttpResponse> {
    let lookup = match user.role {
        UserRole::Teacher => storage
            .get_teacher_by_user_id(user.id)
            .await
            .map(|t| (t.map(|t| t.id), None)),
        UserRole::Student => storage
            .get_student_by_user_id(user.id)
            .await
            .map(|s| (None, s.map(|s| s.id))),
        UserRole::Admin => Ok((None, None)),
    };
    lookup.map_err(|e| storage_error("Failed to load linked profile", &e, ErrorCode::Conflict))
}

/// 教师的数据范围；管理员为 None（不限）
pub(crate) async fn teacher_scope(
    storage: &Arc<dyn Storage>,
    user: &User,
) -> Result<Option<Teacher>, HttpResponse> {
    match user.role {
        UserRole::Admin => Ok(None),
        UserRole::Teacher => teacher_profile(storage, user).await.map(Some),
        UserRole::Student => Err(forbidden(ErrorCode::Forbidden, "Access denied.")),
    }
}

/// 把 `Result<Option<T>>` 展开为实体或 404
pub(crate) fn found<T>(
    result: crate::errors::Result<Option<T>>,
    context: &str,
    missing: ErrorCode,
) -> Result<T, HttpResponse> {
    match result {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(not_found(missing, format!("{context}: not found"))),
        Err(e) => Err(storage_error(context, &e, ErrorCode::Conflict)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_storage_error_status() {
        let resp = storage_error(
            "create",
            &SchoolHubError::conflict("dup"),
            ErrorCode::StudentAlreadyExists,
        );
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = storage_error("create", &SchoolHubError::validation("bad"), ErrorCode::Conflict);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = storage_error(
            "create",
            &SchoolHubError::database_operation("down"),
            ErrorCode::Conflict,
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_found() {
        assert_eq!(found(Ok(Some(3)), "x", ErrorCode::NotFound).ok(), Some(3));
        let resp = found::<i32>(Ok(None), "x", ErrorCode::ClassNotFound).unwrap_err();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
