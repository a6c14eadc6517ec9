use super::entities::AttendanceStatus;
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 考勤查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_id: Option<i64>,
    pub student_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

// 单个学生的考勤标记
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceMark {
    pub student_id: i64,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

// 批量点名：同一班级同一天
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct BatchAttendanceRequest {
    pub class_id: i64,
    pub session_date: NaiveDate,
    pub records: Vec<AttendanceMark>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryParams {
    pub class_id: i64,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// 单个学生的考勤汇总区间
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DateRangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// 考勤列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    // 只返回这些班级的记录（教师视角）
    pub class_ids: Option<Vec<i64>>,
    pub student_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort_order: SortOrder,
}

impl From<AttendanceListParams> for AttendanceListQuery {
    fn from(params: AttendanceListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            class_id: params.class_id,
            class_ids: None,
            student_id: params.student_id,
            status: params.status,
            from: params.from,
            to: params.to,
            sort_order: params.sort_order,
        }
    }
}
