use actix_web::{HttpRequest, HttpResponse};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::{AttendanceListParams, AttendanceListQuery},
};
use crate::services::context::{
    Reply, bad_request, current_user, paginate, storage_error, teacher_scope,
};
use crate::utils::validate::validate_date_range;

pub async fn list_attendance(
    service: &AttendanceService,
    query: AttendanceListParams,
    request: &HttpRequest,
) -> Reply {
    validate_date_range(query.from, query.to)
        .map_err(|msg| bad_request(ErrorCode::ValidationFailed, msg))?;

    let user = current_user(request)?;
    let storage = service.get_storage(request)?;

    let mut list_query = AttendanceListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    if let Some(teacher) = teacher_scope(&storage, &user).await? {
        let classes = storage
            .list_classes_by_teacher(teacher.id)
            .await
            .map_err(|e| storage_error("Failed to retrieve classes", &e, ErrorCode::Conflict))?;
        list_query.class_ids = Some(classes.into_iter().map(|c| c.id).collect());
    }

    let response = storage
        .list_attendance_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve attendance", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Attendance retrieved successfully",
    )))
}
