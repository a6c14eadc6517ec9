pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod me;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::attendance::requests::{AttendanceListParams, DateRangeParams};
use crate::models::grades::requests::GradeListParams;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_students(self, query, request).await)
    }

    pub async fn create_student(
        &self,
        data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_student(self, data, request).await)
    }

    pub async fn get_student(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(get::get_student(self, id, request).await)
    }

    pub async fn update_student(
        &self,
        id: i64,
        data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_student(self, id, data, request).await)
    }

    pub async fn delete_student(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(delete::delete_student(self, id, request).await)
    }

    /// 学生本人视图
    pub async fn get_me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(me::get_me(self, request).await)
    }

    pub async fn my_attendance(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(me::my_attendance(self, query, request).await)
    }

    pub async fn my_grades(
        &self,
        query: GradeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(me::my_grades(self, query, request).await)
    }

    pub async fn my_assignments(
        &self,
        query: AssignmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(me::my_assignments(self, query, request).await)
    }

    /// 教职工查看的汇总
    pub async fn attendance_summary(
        &self,
        id: i64,
        range: DateRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(summary::attendance_summary(self, id, range, request).await)
    }

    pub async fn grade_summary(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(summary::grade_summary(self, id, request).await)
    }
}
