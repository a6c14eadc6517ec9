use actix_web::{HttpRequest, HttpResponse};
use chrono::Utc;

use super::AnnouncementService;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery,
    announcements::{
        entities::Audience,
        requests::{AnnouncementListParams, AnnouncementListQuery},
    },
    users::entities::UserRole,
};
use crate::services::context::{Reply, current_user, paginate, storage_error};

/// 根据角色收敛筛选条件
pub(crate) fn scoped_query(role: UserRole, params: AnnouncementListParams) -> AnnouncementListQuery {
    let pagination = paginate(PaginationQuery::from_parts(params.page, params.limit));
    let now = Utc::now();

    if role == UserRole::Admin {
        return AnnouncementListQuery {
            pagination,
            audiences: params.audience.map(|a| vec![a]),
            priority: params.priority,
            search: params.search,
            active_at: params.active_only.then_some(now),
            sort_order: params.sort_order,
        };
    }

    let visible = Audience::visible_to(role);
    let audiences = match params.audience {
        Some(audience) if visible.contains(&audience) => vec![audience],
        // 请求了不可见的受众时返回空集
        Some(_) => Vec::new(),
        None => visible.to_vec(),
    };

    AnnouncementListQuery {
        pagination,
        audiences: Some(audiences),
        priority: params.priority,
        search: params.search,
        active_at: Some(now),
        sort_order: params.sort_order,
    }
}

pub async fn list_announcements(
    service: &AnnouncementService,
    query: AnnouncementListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;

    let response = storage
        .list_announcements_with_pagination(scoped_query(user.role, query))
        .await
        .map_err(|e| storage_error("Failed to retrieve announcements", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Announcements retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;

    fn params(audience: Option<Audience>, active_only: bool) -> AnnouncementListParams {
        AnnouncementListParams {
            page: Some(1),
            limit: Some(10),
            audience,
            priority: None,
            search: None,
            active_only,
            sort_order: SortOrder::Desc,
        }
    }

    #[test]
    fn test_admin_query_keeps_filters() {
        let query = scoped_query(UserRole::Admin, params(Some(Audience::Teachers), false));
        assert_eq!(query.audiences, Some(vec![Audience::Teachers]));
        assert!(query.active_at.is_none());

        let query = scoped_query(UserRole::Admin, params(None, true));
        assert!(query.audiences.is_none());
        assert!(query.active_at.is_some());
    }

    #[test]
    fn test_student_query_is_restricted() {
        let query = scoped_query(UserRole::Student, params(None, false));
        assert_eq!(query.audiences, Some(vec![Audience::All, Audience::Students]));
        assert!(query.active_at.is_some());

        let query = scoped_query(UserRole::Student, params(Some(Audience::Teachers), false));
        assert_eq!(query.audiences, Some(Vec::new()));
    }
}
