use super::entities::Subject;
use crate::models::common::PaginatedResponse;

pub type SubjectListResponse = PaginatedResponse<Subject>;
