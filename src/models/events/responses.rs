use super::entities::Event;
use crate::models::common::PaginatedResponse;

pub type EventListResponse = PaginatedResponse<Event>;
