use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::CreateTeacherRequest,
    users::entities::UserRole,
};
use crate::services::context::{Reply, bad_request, storage_error};
use crate::storage::Storage;
use crate::utils::validate::{validate_code, validate_email, validate_required};

pub async fn create_teacher(
    service: &TeacherService,
    mut data: CreateTeacherRequest,
    request: &HttpRequest,
) -> Reply {
    data.email = data.email.trim().to_lowercase();

    validate_code("employee_code", &data.employee_code)
        .and_then(|_| validate_required("first_name", &data.first_name))
        .and_then(|_| validate_required("last_name", &data.last_name))
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    validate_email(&data.email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;

    let storage = service.get_storage(request)?;
    if let Some(user_id) = data.user_id {
        check_linked_account(&storage, user_id, UserRole::Teacher).await?;
    }

    match storage.create_teacher(data).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.employee_code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => Err(storage_error(
            "Teacher creation failed",
            &e,
            ErrorCode::TeacherAlreadyExists,
        )),
    }
}

/// 关联的登录账号必须存在且角色匹配
pub(crate) async fn check_linked_account(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    role: UserRole,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.role == role => Ok(()),
        Ok(Some(user)) => Err(bad_request(
            ErrorCode::ValidationFailed,
            format!("User {} has role {}, expected {}", user.id, user.role, role),
        )),
        Ok(None) => Err(bad_request(
            ErrorCode::UserNotFound,
            format!("User {user_id} does not exist"),
        )),
        Err(e) => Err(storage_error("Failed to load user", &e, ErrorCode::Conflict)),
    }
}
