use super::entities::{AttendanceRecord, AttendanceStats, StudentAttendanceSummary};
use crate::models::common::PaginatedResponse;
use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

pub type AttendanceListResponse = PaginatedResponse<AttendanceRecord>;

// 批量点名结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BatchAttendanceResponse {
    pub class_id: i64,
    pub session_date: NaiveDate,
    pub created: i64,
    pub updated: i64,
    pub records: Vec<AttendanceRecord>,
}

// 班级考勤汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct ClassAttendanceSummaryResponse {
    pub class_id: i64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub overall: AttendanceStats,
    pub students: Vec<StudentAttendanceSummary>,
}

// 学生个人考勤汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceSummaryResponse {
    pub student_id: i64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub stats: AttendanceStats,
}
