use super::entities::Class;
use crate::models::common::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

// 班级列表响应
pub type ClassListResponse = PaginatedResponse<Class>;

// 班级详情：附带当前学生人数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub student_count: i64,
}
