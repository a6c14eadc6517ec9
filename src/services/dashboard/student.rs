use actix_web::{HttpRequest, HttpResponse};
use chrono::Utc;

use super::{DASHBOARD_ITEMS, DashboardService};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery, SortOrder,
    announcements::{entities::Audience, requests::AnnouncementListQuery},
    assignments::{
        entities::AssignmentStatus,
        requests::{AssignmentListQuery, AssignmentSortBy},
    },
    attendance::{entities::AttendanceStats, requests::AttendanceListQuery},
    dashboard::responses::StudentDashboardResponse,
    grades::entities::GradeSummary,
    users::entities::UserRole,
};
use crate::services::context::{Reply, current_user, storage_error, student_profile};

pub async fn student_dashboard(service: &DashboardService, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let student = student_profile(&storage, &user).await?;

    let now = Utc::now();
    let first_page = PaginationQuery::new(1, DASHBOARD_ITEMS);

    let class = match student.class_id {
        Some(class_id) => storage
            .get_class_by_id(class_id)
            .await
            .map_err(|e| storage_error("Failed to load class", &e, ErrorCode::Conflict))?,
        None => None,
    };

    let records = storage
        .list_attendance_records(AttendanceListQuery {
            student_id: Some(student.id),
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve attendance", &e, ErrorCode::Conflict))?;
    let attendance = AttendanceStats::tally(
        records.into_iter().map(|r| r.status),
        AppConfig::get().attendance.rate_decimals,
    );

    let grades = storage
        .list_grades_by_student(student.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve grades", &e, ErrorCode::Conflict))?;
    let summary = GradeSummary::from_grades(student.id, &grades, |_| None);

    let upcoming_assignments = match student.class_id {
        Some(class_id) => {
            storage
                .list_assignments_with_pagination(AssignmentListQuery {
                    pagination: first_page,
                    class_id: Some(class_id),
                    status: Some(AssignmentStatus::Published),
                    due_after: Some(now),
                    sort_by: AssignmentSortBy::DueAt,
                    sort_order: SortOrder::Asc,
                    ..Default::default()
                })
                .await
                .map_err(|e| {
                    storage_error("Failed to retrieve assignments", &e, ErrorCode::Conflict)
                })?
                .items
        }
        None => Vec::new(),
    };

    let announcements = storage
        .list_announcements_with_pagination(AnnouncementListQuery {
            pagination: first_page,
            audiences: Some(Audience::visible_to(UserRole::Student).to_vec()),
            active_at: Some(now),
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await
        .map_err(|e| storage_error("Failed to retrieve announcements", &e, ErrorCode::Conflict))?
        .items;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentDashboardResponse {
            student,
            class,
            attendance,
            average_percentage: summary.overall_percentage,
            average_letter: summary.overall_letter,
            upcoming_assignments,
            announcements,
        },
        "Dashboard retrieved successfully",
    )))
}
