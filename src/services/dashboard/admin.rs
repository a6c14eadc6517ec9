use actix_web::{HttpRequest, HttpResponse};
use chrono::Utc;

use super::{DASHBOARD_ITEMS, DashboardService};
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery, SortOrder,
    announcements::requests::AnnouncementListQuery,
    dashboard::responses::AdminDashboardResponse,
    events::{
        entities::EventStatus,
        requests::{EventListQuery, EventSortBy},
    },
};
use crate::services::context::{Reply, storage_error};

pub async fn admin_dashboard(service: &DashboardService, request: &HttpRequest) -> Reply {
    let storage = service.get_storage(request)?;
    let first_page = PaginationQuery::new(1, DASHBOARD_ITEMS);

    let counts = storage
        .count_entities()
        .await
        .map_err(|e| storage_error("Failed to count entities", &e, ErrorCode::Conflict))?;

    let upcoming_events = storage
        .list_events_with_pagination(EventListQuery {
            pagination: first_page,
            status: Some(EventStatus::Upcoming),
            sort_by: EventSortBy::StartAt,
            sort_order: SortOrder::Asc,
            now: Utc::now(),
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve events", &e, ErrorCode::Conflict))?
        .items;

    let latest_announcements = storage
        .list_announcements_with_pagination(AnnouncementListQuery {
            pagination: first_page,
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve announcements", &e, ErrorCode::Conflict))?
        .items;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AdminDashboardResponse {
            counts,
            upcoming_events,
            latest_announcements,
        },
        "Dashboard retrieved successfully",
    )))
}
