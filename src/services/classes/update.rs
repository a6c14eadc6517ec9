use actix_web::{HttpRequest, HttpResponse};

use super::ClassService;
use super::create::ensure_teacher_exists;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, bad_request, conflict, found, not_found, storage_error};
use crate::utils::validate::{validate_capacity, validate_required};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    mut update_data: UpdateClassRequest,
) -> Reply {
    if let Some(name) = update_data.name.as_mut() {
        *name = name.trim().to_string();
        validate_required("name", name)
            .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    }

    let storage = service.get_storage(request)?;
    found(
        storage.get_class_by_id(class_id).await,
        "Class",
        ErrorCode::ClassNotFound,
    )?;

    // 容量不能低于当前人数
    if let Some(capacity) = update_data.capacity {
        validate_capacity(capacity).map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
        let enrolled = storage
            .count_students_in_class(class_id)
            .await
            .map_err(|e| storage_error("Failed to count students", &e, ErrorCode::Conflict))?;
        if (capacity as u64) < enrolled {
            return Err(conflict(
                ErrorCode::ClassCapacityExceeded,
                format!("Capacity {capacity} is below the {enrolled} students already enrolled"),
            ));
        }
    }

    if let Some(teacher_id) = update_data.teacher_id {
        ensure_teacher_exists(&storage, teacher_id).await?;
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class, "Class updated successfully"))),
        Ok(None) => Err(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Err(storage_error(
            "Class update failed",
            &e,
            ErrorCode::ClassAlreadyExists,
        )),
    }
}
