use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

// 科目列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub enum SubjectSortBy {
    Name,
    Code,
    Credits,
    #[default]
    CreatedAt,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SubjectSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct SubjectListQuery {
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
    pub sort_by: SubjectSortBy,
    pub sort_order: SortOrder,
}

impl From<SubjectListParams> for SubjectListQuery {
    fn from(params: SubjectListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            teacher_id: params.teacher_id,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}
