use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;
use crate::models::common::stats::{percentage, round_to};

define_string_enum! {
    // 考勤状态
    #[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
    pub enum AttendanceStatus {
        Present => "present",
        Absent => "absent",
        Late => "late",
        Excused => "excused",
    }
}

// 考勤记录，(student_id, class_id, session_date) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub session_date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub recorded_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 考勤统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceStats {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    // present ÷ total × 100，迟到不计入出勤
    pub rate: f64,
}

impl AttendanceStats {
    pub fn tally(
        statuses: impl IntoIterator<Item = AttendanceStatus>,
        rate_decimals: u32,
    ) -> Self {
        let mut stats = Self::default();
        for status in statuses {
            stats.total += 1;
            match status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::Excused => stats.excused += 1,
            }
        }
        stats.rate = attendance_rate(stats.present, stats.total, rate_decimals);
        stats
    }
}

/// 出勤率，没有任何记录时为 0
pub fn attendance_rate(present: i64, total: i64, decimals: u32) -> f64 {
    round_to(percentage(present as f64, total as f64), decimals)
}

// 单个学生的考勤汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceSummary {
    pub student_id: i64,
    pub student_name: String,
    pub stats: AttendanceStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_with_no_sessions_is_zero() {
        assert_eq!(attendance_rate(0, 0, 2), 0.0);
        let stats = AttendanceStats::tally(Vec::<AttendanceStatus>::new(), 2);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.rate, 0.0);
    }

    #[test]
    fn test_rate_rounds_to_decimals() {
        assert_eq!(attendance_rate(2, 3, 2), 66.67);
        assert_eq!(attendance_rate(2, 3, 0), 67.0);
        assert_eq!(attendance_rate(3, 3, 2), 100.0);
    }

    #[test]
    fn test_tally_counts_each_status() {
        use AttendanceStatus::*;
        let stats = AttendanceStats::tally([Present, Late, Absent, Present, Excused], 2);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.present, 2);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.excused, 1);
        assert_eq!(stats.rate, 40.0);
    }
}
