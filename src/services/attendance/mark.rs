use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::{AttendanceService, managed_class};
use crate::errors::SchoolHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::{AttendanceMark, BatchAttendanceRequest},
};
use crate::services::context::{Reply, bad_request, current_user, storage_error};

/// 同一批次内学生不能重复
pub(crate) fn find_duplicate(records: &[AttendanceMark]) -> Option<i64> {
    let mut seen = HashSet::new();
    records
        .iter()
        .find(|mark| !seen.insert(mark.student_id))
        .map(|mark| mark.student_id)
}

pub async fn mark_attendance(
    service: &AttendanceService,
    data: BatchAttendanceRequest,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;

    if data.records.is_empty() {
        return Err(bad_request(
            ErrorCode::ValidationFailed,
            "records must not be empty",
        ));
    }
    if let Some(student_id) = find_duplicate(&data.records) {
        return Err(bad_request(
            ErrorCode::ValidationFailed,
            format!("Student {student_id} appears more than once"),
        ));
    }

    let storage = service.get_storage(request)?;
    let (class, teacher) = managed_class(&storage, &user, data.class_id).await?;

    match storage.mark_attendance(teacher.map(|t| t.id), data).await {
        Ok(result) => {
            info!(
                "Attendance for class {} on {} marked by {}: {} created, {} updated",
                class.name, result.session_date, user.username, result.created, result.updated
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                result,
                "Attendance marked successfully",
            )))
        }
        Err(SchoolHubError::Validation(msg)) => {
            Err(bad_request(ErrorCode::AttendanceStudentNotInClass, msg))
        }
        Err(e) => Err(storage_error("Attendance marking failed", &e, ErrorCode::Conflict)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    fn mark(student_id: i64) -> AttendanceMark {
        AttendanceMark {
            student_id,
            status: AttendanceStatus::Present,
            remarks: None,
        }
    }

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate(&[mark(1), mark(2), mark(3)]), None);
        assert_eq!(find_duplicate(&[mark(1), mark(2), mark(1)]), Some(1));
        assert_eq!(find_duplicate(&[]), None);
    }
}
