use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, Duration, Utc};

use super::{DASHBOARD_ITEMS, DUE_SOON_DAYS, DashboardService};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery, SortOrder,
    assignments::requests::{AssignmentListQuery, AssignmentSortBy},
    attendance::entities::attendance_rate,
    dashboard::responses::{ClassOverview, TeacherDashboardResponse},
};
use crate::services::context::{Reply, current_user, storage_error, teacher_profile};

/// 今日点名覆盖率：已点名人数 / 班级总人数
pub(crate) fn coverage(classes: &[ClassOverview], rate_decimals: u32) -> f64 {
    let marked: i64 = classes.iter().map(|c| c.marked_today).sum();
    let enrolled: i64 = classes.iter().map(|c| c.student_count).sum();
    attendance_rate(marked.min(enrolled), enrolled, rate_decimals)
}

/// 未来几天内截止的作业，按截止时间升序取前几条
pub(crate) fn due_soon_query(teacher_id: i64, now: DateTime<Utc>) -> AssignmentListQuery {
    AssignmentListQuery {
        pagination: PaginationQuery::new(1, DASHBOARD_ITEMS),
        teacher_id: Some(teacher_id),
        due_after: Some(now),
        due_before: Some(now + Duration::days(DUE_SOON_DAYS)),
        sort_by: AssignmentSortBy::DueAt,
        sort_order: SortOrder::Asc,
        ..Default::default()
    }
}

pub async fn teacher_dashboard(service: &DashboardService, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let teacher = teacher_profile(&storage, &user).await?;

    let now = Utc::now();
    let today = now.date_naive();

    let classes = storage
        .list_classes_by_teacher(teacher.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve classes", &e, ErrorCode::Conflict))?;

    let mut overviews = Vec::with_capacity(classes.len());
    for class in classes {
        let student_count = storage
            .count_students_in_class(class.id)
            .await
            .map_err(|e| storage_error("Failed to count students", &e, ErrorCode::Conflict))?;
        let marked_today = storage
            .count_attendance_marked(class.id, today)
            .await
            .map_err(|e| storage_error("Failed to count attendance", &e, ErrorCode::Conflict))?;
        overviews.push(ClassOverview {
            class,
            student_count: student_count as i64,
            marked_today: marked_today as i64,
        });
    }

    let assignments_due_soon = storage
        .list_assignments_with_pagination(due_soon_query(teacher.id, now))
        .await
        .map_err(|e| storage_error("Failed to retrieve assignments", &e, ErrorCode::Conflict))?
        .items;

    let attendance_coverage = coverage(&overviews, AppConfig::get().attendance.rate_decimals);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherDashboardResponse {
            teacher,
            today,
            classes: overviews,
            assignments_due_soon,
            attendance_coverage,
        },
        "Dashboard retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::Class;

    fn overview(student_count: i64, marked_today: i64) -> ClassOverview {
        ClassOverview {
            class: Class {
                id: 1,
                name: "7A".to_string(),
                grade_level: 7,
                section: None,
                teacher_id: Some(1),
                room: None,
                academic_year: "2025-2026".to_string(),
                capacity: 40,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            student_count,
            marked_today,
        }
    }

    #[test]
    fn test_coverage() {
        assert_eq!(coverage(&[], 2), 0.0);
        assert_eq!(coverage(&[overview(20, 20), overview(20, 0)], 2), 50.0);
        assert_eq!(coverage(&[overview(3, 2)], 2), 66.67);
    }

    #[test]
    fn test_due_soon_query_is_capped() {
        let now = Utc::now();
        let query = due_soon_query(9, now);
        assert_eq!(query.pagination, PaginationQuery::new(1, DASHBOARD_ITEMS));
        assert_eq!(query.teacher_id, Some(9));
        assert_eq!(query.due_after, Some(now));
        assert_eq!(query.due_before, Some(now + Duration::days(DUE_SOON_DAYS)));
        assert_eq!(query.sort_order, SortOrder::Asc);
    }
}
