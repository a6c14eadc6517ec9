use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub teacher_id: Option<i64>,
    pub grade_level: Option<i32>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub grade_level: i32,
    pub section: Option<String>,
    pub teacher_id: Option<i64>,
    pub room: Option<String>,
    pub academic_year: String,
    pub capacity: Option<i32>,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub grade_level: Option<i32>,
    pub section: Option<String>,
    pub teacher_id: Option<i64>,
    pub room: Option<String>,
    pub academic_year: Option<String>,
    pub capacity: Option<i32>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub grade_level: Option<i32>,
    pub search: Option<String>,
    pub sort_order: SortOrder,
}

impl From<ClassQueryParams> for ClassListQuery {
    fn from(params: ClassQueryParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            teacher_id: params.teacher_id,
            grade_level: params.grade_level,
            search: params.search,
            sort_order: params.sort_order,
        }
    }
}
