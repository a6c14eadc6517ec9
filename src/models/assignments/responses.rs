use super::entities::Assignment;
use crate::models::common::PaginatedResponse;

pub type AssignmentListResponse = PaginatedResponse<Assignment>;
