use super::entities::AssignmentStatus;
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentSortBy {
    #[default]
    DueAt,
    Title,
    CreatedAt,
}

// 作业查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub status: Option<AssignmentStatus>,
    pub due_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: AssignmentSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub class_id: i64,
    pub subject_id: i64,
    // 管理员代为布置时需指定教师，教师本人布置时忽略
    pub teacher_id: Option<i64>,
    pub due_at: DateTime<Utc>,
    pub max_score: Option<f64>,
    pub status: Option<AssignmentStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject_id: Option<i64>,
    pub due_at: Option<DateTime<Utc>>,
    pub max_score: Option<f64>,
    pub status: Option<AssignmentStatus>,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub status: Option<AssignmentStatus>,
    pub due_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub sort_by: AssignmentSortBy,
    pub sort_order: SortOrder,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            class_id: params.class_id,
            subject_id: params.subject_id,
            teacher_id: None,
            status: params.status,
            due_before: params.due_before,
            due_after: params.due_after,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}
