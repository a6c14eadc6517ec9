use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, bad_request, storage_error};
use crate::storage::Storage;
use crate::utils::validate::{validate_capacity, validate_required};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> Reply {
    class_data.name = class_data.name.trim().to_string();
    validate_required("name", &class_data.name)
        .and_then(|_| validate_required("academic_year", &class_data.academic_year))
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    if let Some(capacity) = class_data.capacity {
        validate_capacity(capacity).map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    if let Some(teacher_id) = class_data.teacher_id {
        ensure_teacher_exists(&storage, teacher_id).await?;
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully", class.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Err(storage_error(
            "Class creation failed",
            &e,
            ErrorCode::ClassAlreadyExists,
        )),
    }
}

/// 班主任必须是已存在的教师档案
pub(crate) async fn ensure_teacher_exists(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(bad_request(
            ErrorCode::TeacherNotFound,
            format!("Teacher {teacher_id} does not exist"),
        )),
        Err(e) => Err(storage_error("Failed to load teacher", &e, ErrorCode::Conflict)),
    }
}
