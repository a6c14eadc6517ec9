use actix_web::{HttpRequest, HttpResponse};

use super::{AttendanceService, managed_class};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::context::{Reply, current_user, found, not_found, storage_error};

pub async fn delete_attendance(
    service: &AttendanceService,
    id: i64,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let record = found(
        storage.get_attendance_by_id(id).await,
        "Attendance",
        ErrorCode::AttendanceNotFound,
    )?;
    managed_class(&storage, &user, record.class_id).await?;

    match storage.delete_attendance(id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Attendance deleted successfully"))),
        Ok(false) => Err(not_found(ErrorCode::AttendanceNotFound, "Attendance not found")),
        Err(e) => Err(storage_error("Attendance deletion failed", &e, ErrorCode::Conflict)),
    }
}
