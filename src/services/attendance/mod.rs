//! 考勤服务
//!
//! 教师只能为自己担任班主任的班级点名、修改和汇总考勤，管理员不受限制。

pub mod delete;
pub mod list;
pub mod mark;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish, forbidden, found, teacher_scope};
use crate::models::{
    ErrorCode,
    attendance::requests::{
        AttendanceListParams, AttendanceSummaryParams, BatchAttendanceRequest,
        UpdateAttendanceRequest,
    },
    classes::entities::Class,
    teachers::entities::Teacher,
    users::entities::User,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_attendance(
        &self,
        query: AttendanceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_attendance(self, query, request).await)
    }

    /// 批量点名
    pub async fn mark_attendance(
        &self,
        data: BatchAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(mark::mark_attendance(self, data, request).await)
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        data: UpdateAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_attendance(self, id, data, request).await)
    }

    pub async fn delete_attendance(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(delete::delete_attendance(self, id, request).await)
    }

    pub async fn class_summary(
        &self,
        query: AttendanceSummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(summary::class_summary(self, query, request).await)
    }
}

/// 加载班级并确认当前用户可以管理其考勤
///
/// 返回班级和（若为教师）对应的教师档案，用于记录 `recorded_by`。
pub(crate) async fn managed_class(
    storage: &Arc<dyn Storage>,
    user: &User,
    class_id: i64,
) -> Result<(Class, Option<Teacher>), HttpResponse> {
    let teacher = teacher_scope(storage, user).await?;
    let class = found(
        storage.get_class_by_id(class_id).await,
        "Class",
        ErrorCode::ClassNotFound,
    )?;

    if let Some(teacher) = &teacher
        && class.teacher_id != Some(teacher.id)
    {
        return Err(forbidden(
            ErrorCode::ClassPermissionDenied,
            "Only the homeroom teacher can manage attendance for this class",
        ));
    }
    Ok((class, teacher))
}
