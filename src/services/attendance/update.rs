use actix_web::{HttpRequest, HttpResponse};

use super::{AttendanceService, managed_class};
use crate::models::{ApiResponse, ErrorCode, attendance::requests::UpdateAttendanceRequest};
use crate::services::context::{Reply, current_user, found, not_found, storage_error};

pub async fn update_attendance(
    service: &AttendanceService,
    id: i64,
    data: UpdateAttendanceRequest,
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

    match storage.update_attendance(id, data).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance updated successfully",
        ))),
        Ok(None) => Err(not_found(ErrorCode::AttendanceNotFound, "Attendance not found")),
        Err(e) => Err(storage_error("Attendance update failed", &e, ErrorCode::Conflict)),
    }
}
