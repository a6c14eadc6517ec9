use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::EventService;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery,
    announcements::entities::Audience,
    events::requests::{EventListParams, EventListQuery},
    users::entities::UserRole,
};
use crate::services::context::{Reply, bad_request, current_user, paginate, storage_error};
use crate::utils::validate::validate_date_range;

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(23, 59, 59)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| start_of_day(date))
}

/// 日期区间按整天展开；非管理员只能看到面向自己的活动
pub(crate) fn build_query(role: UserRole, params: EventListParams) -> EventListQuery {
    let audiences = if role == UserRole::Admin {
        params.audience.map(|a| vec![a])
    } else {
        let visible = Audience::visible_to(role);
        Some(match params.audience {
            Some(audience) if visible.contains(&audience) => vec![audience],
            Some(_) => Vec::new(),
            None => visible.to_vec(),
        })
    };

    EventListQuery {
        pagination: paginate(PaginationQuery::from_parts(params.page, params.limit)),
        range_start: params.from.map(start_of_day),
        range_end: params.to.map(end_of_day),
        status: params.status,
        audiences,
        search: params.search,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
        now: Utc::now(),
    }
}

pub async fn list_events(
    service: &EventService,
    query: EventListParams,
    request: &HttpRequest,
) -> Reply {
    validate_date_range(query.from, query.to)
        .map_err(|msg| bad_request(ErrorCode::EventRangeInvalid, msg))?;

    let user = current_user(request)?;
    let storage = service.get_storage(request)?;

    let response = storage
        .list_events_with_pagination(build_query(user.role, query))
        .await
        .map_err(|e| storage_error("Failed to retrieve events", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Events retrieved successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use crate::models::events::requests::EventSortBy;

    fn params(from: Option<NaiveDate>, to: Option<NaiveDate>) -> EventListParams {
        EventListParams {
            page: None,
            limit: None,
            from,
            to,
            status: None,
            audience: None,
            search: None,
            sort_by: EventSortBy::StartAt,
            sort_order: SortOrder::Asc,
        }
    }

    #[test]
    fn test_range_covers_whole_days() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let query = build_query(UserRole::Admin, params(Some(day), Some(day)));

        let start = query.range_start.unwrap();
        let end = query.range_end.unwrap();
        assert_eq!(start.to_rfc3339(), "2025-03-14T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-03-14T23:59:59+00:00");
        assert!(query.audiences.is_none());
    }

    #[test]
    fn test_teacher_sees_teacher_audiences() {
        let query = build_query(UserRole::Teacher, params(None, None));
        assert_eq!(query.audiences, Some(vec![Audience::All, Audience::Teachers]));
        assert!(query.range_start.is_none());
    }
}
