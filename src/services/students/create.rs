use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, students::requests::CreateStudentRequest, users::entities::UserRole,
};
use crate::services::context::{Reply, bad_request, conflict, storage_error};
use crate::services::teachers::create::check_linked_account;
use crate::storage::Storage;
use crate::utils::validate::{validate_code, validate_email, validate_required};

pub async fn create_student(
    service: &StudentService,
    mut data: CreateStudentRequest,
    request: &HttpRequest,
) -> Reply {
    data.email = data.email.trim().to_lowercase();

    validate_code("student_code", &data.student_code)
        .and_then(|_| validate_required("first_name", &data.first_name))
        .and_then(|_| validate_required("last_name", &data.last_name))
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;
    validate_email(&data.email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;

    let storage = service.get_storage(request)?;
    if let Some(user_id) = data.user_id {
        check_linked_account(&storage, user_id, UserRole::Student).await?;
    }
    if let Some(class_id) = data.class_id {
        ensure_class_has_room(&storage, class_id).await?;
    }

    match storage.create_student(data).await {
        Ok(student) => {
            info!("Student {} created", student.student_code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Err(storage_error(
            "Student creation failed",
            &e,
            ErrorCode::StudentAlreadyExists,
        )),
    }
}

/// 班级须存在且未满员
pub(crate) async fn ensure_class_has_room(
    storage: &Arc<dyn Storage>,
    class_id: i64,
) -> Result<(), HttpResponse> {
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Err(bad_request(
                ErrorCode::ClassNotFound,
                format!("Class {class_id} does not exist"),
            ));
        }
        Err(e) => return Err(storage_error("Failed to load class", &e, ErrorCode::Conflict)),
    };

    let enrolled = storage
        .count_students_in_class(class_id)
        .await
        .map_err(|e| storage_error("Failed to count students", &e, ErrorCode::Conflict))?;

    if enrolled >= class.capacity.max(0) as u64 {
        return Err(conflict(
            ErrorCode::ClassCapacityExceeded,
            format!("Class {} is full ({} / {})", class.name, enrolled, class.capacity),
        ));
    }
    Ok(())
}
