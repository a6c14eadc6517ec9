use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 年级
    pub grade_level: i32,
    // 分班
    pub section: Option<String>,
    // 班主任（教师ID）
    pub teacher_id: Option<i64>,
    // 教室
    pub room: Option<String>,
    // 学年，如 2025-2026
    pub academic_year: String,
    // 最大学生数
    pub capacity: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
