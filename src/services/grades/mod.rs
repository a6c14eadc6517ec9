//! 成绩服务
//!
//! 教师只能录入和修改自己任教科目的成绩，管理员不受限制。

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish, forbidden, found, storage_error};
use crate::models::{
    ErrorCode,
    grades::requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest},
    subjects::entities::Subject,
    teachers::entities::Teacher,
};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_grades(self, query, request).await)
    }

    pub async fn create_grade(
        &self,
        data: CreateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_grade(self, data, request).await)
    }

    pub async fn update_grade(
        &self,
        id: i64,
        data: UpdateGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_grade(self, id, data, request).await)
    }

    pub async fn delete_grade(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(delete::delete_grade(self, id, request).await)
    }
}

/// 加载科目；教师必须是该科目的任课教师
pub(crate) async fn gradable_subject(
    storage: &Arc<dyn Storage>,
    teacher: Option<&Teacher>,
    subject_id: i64,
) -> Result<Subject, HttpResponse> {
    let subject = found(
        storage.get_subject_by_id(subject_id).await,
        "Subject",
        ErrorCode::SubjectNotFound,
    )?;

    if let Some(teacher) = teacher
        && subject.teacher_id != Some(teacher.id)
    {
        return Err(forbidden(
            ErrorCode::Forbidden,
            "You can only grade subjects you teach",
        ));
    }
    Ok(subject)
}

/// 教师任教科目的 ID 列表
pub(crate) async fn taught_subject_ids(
    storage: &Arc<dyn Storage>,
    teacher: &Teacher,
) -> Result<Vec<i64>, HttpResponse> {
    let subjects = storage
        .list_subjects_by_teacher(teacher.id)
        .await
        .map_err(|e| storage_error("Failed to retrieve subjects", &e, ErrorCode::Conflict))?;
    Ok(subjects.into_iter().map(|s| s.id).collect())
}
