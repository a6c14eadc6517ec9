use super::entities::Teacher;
use crate::models::common::PaginatedResponse;

// 教师列表响应
pub type TeacherListResponse = PaginatedResponse<Teacher>;
