use actix_web::{HttpRequest, HttpResponse};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, PaginationQuery,
    assignments::{
        entities::AssignmentStatus,
        requests::{AssignmentListParams, AssignmentListQuery},
        responses::AssignmentListResponse,
    },
    attendance::requests::{AttendanceListParams, AttendanceListQuery},
    grades::requests::{GradeListParams, GradeListQuery},
};
use crate::services::context::{Reply, current_user, paginate, storage_error, student_profile};

pub async fn get_me(service: &StudentService, request: &HttpRequest) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let student = student_profile(&storage, &user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student retrieved successfully")))
}

pub async fn my_attendance(
    service: &StudentService,
    query: AttendanceListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let student = student_profile(&storage, &user).await?;

    // 只能查看自己的记录，忽略传入的 student_id
    let mut list_query = AttendanceListQuery::from(query);
    list_query.student_id = Some(student.id);
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_attendance_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve attendance", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Attendance retrieved successfully",
    )))
}

pub async fn my_grades(
    service: &StudentService,
    query: GradeListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let student = student_profile(&storage, &user).await?;

    let mut list_query = GradeListQuery::from(query);
    list_query.student_id = Some(student.id);
    list_query.class_id = None;
    list_query.pagination = paginate(list_query.pagination);

    let response = storage
        .list_grades_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve grades", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Grades retrieved successfully")))
}

/// 未分班学生看到的作业列表
fn unassigned_assignments(pagination: PaginationQuery) -> AssignmentListResponse {
    AssignmentListResponse::new(Vec::new(), pagination, 0)
}

/// 本班已发布的作业
pub async fn my_assignments(
    service: &StudentService,
    query: AssignmentListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;
    let student = student_profile(&storage, &user).await?;

    let mut list_query = AssignmentListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    let Some(class_id) = student.class_id else {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            unassigned_assignments(list_query.pagination),
            "Assignments retrieved successfully",
        )));
    };

    list_query.class_id = Some(class_id);
    list_query.status = Some(AssignmentStatus::Published);

    let response = storage
        .list_assignments_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve assignments", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Assignments retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_without_class_sees_empty_page() {
        let page = unassigned_assignments(PaginationQuery::new(2, 20));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.limit, 20);
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.total_pages, 0);
    }
}
