use super::entities::TeacherStatus;
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 教师列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub enum TeacherSortBy {
    Name,
    EmployeeCode,
    HiredOn,
    #[default]
    CreatedAt,
}

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<TeacherStatus>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: TeacherSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

// 创建教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub user_id: Option<i64>,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<TeacherStatus>,
    pub hired_on: Option<NaiveDate>,
}

// 更新教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub user_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<TeacherStatus>,
    pub hired_on: Option<NaiveDate>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub pagination: PaginationQuery,
    pub status: Option<TeacherStatus>,
    pub search: Option<String>,
    pub sort_by: TeacherSortBy,
    pub sort_order: SortOrder,
}

impl From<TeacherListParams> for TeacherListQuery {
    fn from(params: TeacherListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            status: params.status,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}
