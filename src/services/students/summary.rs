use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        entities::AttendanceStats,
        requests::{AttendanceListQuery, DateRangeParams},
        responses::StudentAttendanceSummaryResponse,
    },
    grades::entities::GradeSummary,
};
use crate::services::context::{Reply, bad_request, found, storage_error};
use crate::utils::validate::validate_date_range;

pub async fn attendance_summary(
    service: &StudentService,
    id: i64,
    range: DateRangeParams,
    request: &HttpRequest,
) -> Reply {
    validate_date_range(range.from, range.to)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;

    let storage = service.get_storage(request)?;
    let student = found(
        storage.get_student_by_id(id).await,
        "Student",
        ErrorCode::StudentNotFound,
    )?;

    let records = storage
        .list_attendance_records(AttendanceListQuery {
            student_id: Some(student.id),
            from: range.from,
            to: range.to,
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve attendance", &e, ErrorCode::Conflict))?;

    let stats = AttendanceStats::tally(
        records.into_iter().map(|r| r.status),
        AppConfig::get().attendance.rate_decimals,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentAttendanceSummaryResponse {
            student_id: student.id,
            from: range.from,
            to: range.to,
            stats,
        },
        "Attendance summary retrieved successfully",
    )))
}

pub async fn grade_summary(service: &StudentService, id: i64, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let student = found(
        storage.get_student_by_id(id).await,
        "Student",
        ErrorCode::StudentNotFound,
    )?;

    let grades = storage
        .list_grades_by_student(student.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve grades", &e, ErrorCode::Conflict))?;

    let mut subject_ids: Vec<i64> = grades.iter().map(|g| g.subject_id).collect();
    subject_ids.sort_unstable();
    subject_ids.dedup();

    let names: HashMap<i64, String> = storage
        .list_subjects_by_ids(&subject_ids)
        .await
        .map_err(|e| storage_error("Failed to retrieve subjects", &e, ErrorCode::Conflict))?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let summary = GradeSummary::from_grades(student.id, &grades, |id| names.get(&id).cloned());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summary,
        "Grade summary retrieved successfully",
    )))
}
