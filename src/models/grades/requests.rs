use crate::models::common::{PaginationQuery, SortOrder};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeSortBy {
    #[default]
    GradedAt,
    Score,
    ExamName,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub class_id: Option<i64>,
    pub term: Option<String>,
    // 按考试名称搜索
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: GradeSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub exam_name: String,
    pub term: Option<String>,
    pub score: f64,
    // 缺省为 100
    pub max_score: Option<f64>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub exam_name: Option<String>,
    pub term: Option<String>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub remarks: Option<String>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct GradeListQuery {
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    // 只返回该班级学生的成绩
    pub class_id: Option<i64>,
    // 只返回这些科目的成绩（教师视角）
    pub subject_ids: Option<Vec<i64>>,
    pub term: Option<String>,
    pub search: Option<String>,
    pub sort_by: GradeSortBy,
    pub sort_order: SortOrder,
}

impl From<GradeListParams> for GradeListQuery {
    fn from(params: GradeListParams) -> Self {
        Self {
            pagination: PaginationQuery::from_parts(params.page, params.limit),
            student_id: params.student_id,
            subject_id: params.subject_id,
            class_id: params.class_id,
            subject_ids: None,
            term: params.term,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}
