//! 三种角色的仪表盘聚合数据

pub mod admin;
pub mod student;
pub mod teacher;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish};
use crate::storage::Storage;

/// 仪表盘列表的条数
pub(crate) const DASHBOARD_ITEMS: i64 = 5;
/// 教师仪表盘「即将截止」的天数
pub(crate) const DUE_SOON_DAYS: i64 = 7;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn admin(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(admin::admin_dashboard(self, request).await)
    }

    pub async fn teacher(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(teacher::teacher_dashboard(self, request).await)
    }

    pub async fn student(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        finish(student::student_dashboard(self, request).await)
    }
}
