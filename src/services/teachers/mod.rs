pub mod classes;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_teachers(
        &self,
        query: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_teachers(self, query, request).await)
    }

    pub async fn create_teacher(
        &self,
        data: CreateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_teacher(self, data, request).await)
    }

    pub async fn get_teacher(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_teacher(self, id, request).await)
    }

    // 当前登录教师的档案
    pub async fn get_me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_me(self, request).await)
    }

    pub async fn update_teacher(
        &self,
        id: i64,
        data: UpdateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_teacher(self, id, data, request).await)
    }

    pub async fn delete_teacher(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(delete::delete_teacher(self, id, request).await)
    }

    // 担任班主任的班级
    pub async fn list_classes(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(classes::list_classes(self, id, request).await)
    }
}
