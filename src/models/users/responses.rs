use serde::Serialize;
use ts_rs::TS;

use super::entities::User;
use crate::models::common::PaginatedResponse;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserDetailResponse {
    pub user: User,
    // 教师账号关联的教师档案
    pub teacher_id: Option<i64>,
    // 学生账号关联的学生档案
    pub student_id: Option<i64>,
}

pub type UserListResponse = PaginatedResponse<User>;
