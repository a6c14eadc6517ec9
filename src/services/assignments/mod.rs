//! 作业服务
//!
//! 教师只能管理自己布置的作业，管理员可以管理全部作业。

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish, forbidden, found, teacher_scope};
use crate::models::{
    ErrorCode,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    users::entities::User,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_assignments(
        &self,
        query: AssignmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_assignments(self, query, request).await)
    }

    pub async fn create_assignment(
        &self,
        data: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_assignment(self, data, request).await)
    }

    pub async fn get_assignment(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_assignment(self, id, request).await)
    }

    pub async fn update_assignment(
        &self,
        id: i64,
        data: UpdateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_assignment(self, id, data, request).await)
    }

    pub async fn delete_assignment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(delete::delete_assignment(self, id, request).await)
    }
}

/// 加载作业并确认当前用户有权管理
pub(crate) async fn owned_assignment(
    storage: &Arc<dyn Storage>,
    user: &User,
    id: i64,
) -> Result<Assignment, HttpResponse> {
    let assignment = found(
        storage.get_assignment_by_id(id).await,
        "Assignment",
        ErrorCode::AssignmentNotFound,
    )?;

    if let Some(teacher) = teacher_scope(storage, user).await?
        && assignment.teacher_id != teacher.id
    {
        return Err(forbidden(
            ErrorCode::Forbidden,
            "You can only manage your own assignments",
        ));
    }
    Ok(assignment)
}
