use super::entities::Announcement;
use crate::models::common::PaginatedResponse;

pub type AnnouncementListResponse = PaginatedResponse<Announcement>;
