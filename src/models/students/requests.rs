use super::entities::StudentStatus;
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 学生列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum StudentSortBy {
    Name,
    StudentCode,
    EnrolledOn,
    #[default]
    CreatedAt,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_id: Option<i64>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: StudentSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub user_id: Option<i64>,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub class_id: Option<i64>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: Option<StudentStatus>,
    // 缺省为当天
    pub enrolled_on: Option<NaiveDate>,
}

// 更新学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub user_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub class_id: Option<i64>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: Option<StudentStatus>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
    pub sort_by: StudentSortBy,
    pub sort_order: SortOrder,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            class_id: params.class_id,
            status: params.status,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}
