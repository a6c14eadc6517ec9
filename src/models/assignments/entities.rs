use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;

define_string_enum! {
    // 作业状态：草稿对学生不可见
    #[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
    pub enum AssignmentStatus {
        Draft => "draft",
        Published => "published",
        Closed => "closed",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub due_at: DateTime<Utc>,
    pub max_score: f64,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

