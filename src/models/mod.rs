//! 数据模型定义
//!
//! 每个业务模块分为 `entities`（业务实体）、`requests`（请求参数）、`responses`（响应结构）。

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod events;
pub mod grades;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod users;

pub use common::{
    ApiResponse, PaginatedResponse, PaginationMeta, PaginationQuery, SortOrder,
};

/// 程序启动时间（用于健康检查中的运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 按模块分段：通用 1xxx、认证 2xxx、用户 3xxx、教师 4xxx、学生 5xxx、
/// 班级 6xxx、科目 7xxx、公告与活动 8xxx、作业/成绩/考勤 9xxx。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证
    Unauthorized = 2000,
    AuthFailed = 2001,
    Forbidden = 2003,

    // 用户
    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserEmailInvalid = 3002,
    UserPasswordInvalid = 3003,
    UserAlreadyExists = 3004,
    CanNotDeleteCurrentUser = 3005,

    // 教师
    TeacherNotFound = 4000,
    TeacherAlreadyExists = 4001,
    TeacherProfileMissing = 4002,

    // 学生
    StudentNotFound = 5000,
    StudentAlreadyExists = 5001,
    StudentProfileMissing = 5002,

    // 班级
    ClassNotFound = 6000,
    ClassAlreadyExists = 6001,
    ClassPermissionDenied = 6002,
    ClassCapacityExceeded = 6003,

    // 科目
    SubjectNotFound = 7000,
    SubjectAlreadyExists = 7001,

    // 公告与活动
    AnnouncementNotFound = 8000,
    EventNotFound = 8100,
    EventRangeInvalid = 8101,

    // 作业、成绩、考勤
    AssignmentNotFound = 9000,
    GradeNotFound = 9100,
    GradeScoreInvalid = 9101,
    AttendanceNotFound = 9200,
    AttendanceStudentNotInClass = 9201,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 2000);
        assert_eq!(ErrorCode::ClassCapacityExceeded as i32, 6003);
        assert_eq!(ErrorCode::AttendanceStudentNotInClass as i32, 9201);
    }
}
