use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::{
    announcements::entities::Announcement,
    assignments::entities::Assignment,
    attendance::entities::AttendanceStats,
    classes::entities::Class,
    events::entities::Event,
    grades::entities::GradeLetter,
    students::entities::Student,
    teachers::entities::Teacher,
};

// 各类数据总量
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct EntityCounts {
    pub users: i64,
    pub students: i64,
    pub teachers: i64,
    pub classes: i64,
    pub subjects: i64,
    pub announcements: i64,
    pub events: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct AdminDashboardResponse {
    pub counts: EntityCounts,
    pub upcoming_events: Vec<Event>,
    pub latest_announcements: Vec<Announcement>,
}

// 班级当天点名情况
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ClassOverview {
    pub class: Class,
    pub student_count: i64,
    pub marked_today: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherDashboardResponse {
    pub teacher: Teacher,
    pub today: NaiveDate,
    pub classes: Vec<ClassOverview>,
    pub assignments_due_soon: Vec<Assignment>,
    // 当天已点名人数 ÷ 应到人数 × 100
    pub attendance_coverage: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentDashboardResponse {
    pub student: Student,
    pub class: Option<Class>,
    pub attendance: AttendanceStats,
    pub average_percentage: Option<f64>,
    pub average_letter: Option<GradeLetter>,
    pub upcoming_assignments: Vec<Assignment>,
    pub announcements: Vec<Announcement>,
}
