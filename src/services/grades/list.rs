use actix_web::{HttpRequest, HttpResponse};

use super::{GradeService, taught_subject_ids};
use crate::models::{
    ApiResponse, ErrorCode,
    grades::requests::{GradeListParams, GradeListQuery},
};
use crate::services::context::{Reply, current_user, paginate, storage_error, teacher_scope};

pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> Reply {
    let user = current_user(request)?;
    let storage = service.get_storage(request)?;

    let mut list_query = GradeListQuery::from(query);
    list_query.pagination = paginate(list_query.pagination);

    // 教师只能看到自己任教科目的成绩
    if let Some(teacher) = teacher_scope(&storage, &user).await? {
        list_query.subject_ids = Some(taught_subject_ids(&storage, &teacher).await?);
    }

    let response = storage
        .list_grades_with_pagination(list_query)
        .await
        .map_err(|e| storage_error("Failed to retrieve grades", &e, ErrorCode::Conflict))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Grades retrieved successfully")))
}
