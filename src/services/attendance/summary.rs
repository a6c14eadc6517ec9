use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse};

use super::{AttendanceService, managed_class};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        entities::{AttendanceRecord, AttendanceStats, AttendanceStatus, StudentAttendanceSummary},
        requests::{AttendanceListQuery, AttendanceSummaryParams},
        responses::ClassAttendanceSummaryResponse,
    },
    students::entities::Student,
};
use crate::services::context::{Reply, bad_request, current_user, storage_error};
use crate::utils::validate::validate_date_range;

/// 按学生汇总；名单中没有记录的学生出勤率为 0
pub(crate) fn summarize(
    students: &[Student],
    records: &[AttendanceRecord],
    rate_decimals: u32,
) -> (AttendanceStats, Vec<StudentAttendanceSummary>) {
    let mut by_student: HashMap<i64, Vec<AttendanceStatus>> = HashMap::new();
    for record in records {
        by_student.entry(record.student_id).or_default().push(record.status);
    }

    let per_student = students
        .iter()
        .map(|student| StudentAttendanceSummary {
            student_id: student.id,
            student_name: student.full_name(),
            stats: AttendanceStats::tally(
                by_student.remove(&student.id).unwrap_or_default(),
                rate_decimals,
            ),
        })
        .collect();

    let overall = AttendanceStats::tally(records.iter().map(|r| r.status), rate_decimals);
    (overall, per_student)
}

pub async fn class_summary(
    service: &AttendanceService,
    query: AttendanceSummaryParams,
    request: &HttpRequest,
) -> Reply {
    validate_date_range(query.from, query.to)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;

    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let (class, _) = managed_class(&storage, &user, query.class_id).await?;

    let students = storage
        .list_students_by_class(class.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve students", &e, ErrorCode::Conflict))?;
    let records = storage
        .list_attendance_records(AttendanceListQuery {
            class_id: Some(class.id),
            from: query.from,
            to: query.to,
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve attendance", &e, ErrorCode::Conflict))?;

    let (overall, students) =
        summarize(&students, &records, AppConfig::get().attendance.rate_decimals);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassAttendanceSummaryResponse {
            class_id: class.id,
            from: query.from,
            to: query.to,
            overall,
            students,
        },
        "Attendance summary retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::StudentStatus;
    use chrono::{NaiveDate, Utc};

    fn student(id: i64, first: &str) -> Student {
        Student {
            id,
            user_id: None,
            student_code: format!("S{id:03}"),
            first_name: first.to_string(),
            last_name: "Lee".to_string(),
            email: format!("s{id}@school.test"),
            class_id: Some(1),
            date_of_birth: None,
            gender: None,
            guardian_name: None,
            guardian_phone: None,
            status: StudentStatus::Active,
            enrolled_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn record(student_id: i64, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            student_id,
            class_id: 1,
            session_date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            status,
            remarks: None,
            recorded_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_summarize_per_student() {
        use AttendanceStatus::*;
        let students = vec![student(1, "Ana"), student(2, "Ben"), student(3, "Cai")];
        let records = vec![
            record(1, 3, Present),
            record(1, 4, Present),
            record(2, 3, Absent),
            record(2, 4, Late),
        ];

        let (overall, rows) = summarize(&students, &records, 2);

        assert_eq!(overall.total, 4);
        assert_eq!(overall.rate, 50.0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].student_name, "Ana Lee");
        assert_eq!(rows[0].stats.rate, 100.0);
        assert_eq!(rows[1].stats.late, 1);
        assert_eq!(rows[1].stats.rate, 0.0);
        assert_eq!(rows[2].stats.total, 0);
        assert_eq!(rows[2].stats.rate, 0.0);
    }
}
