//! 公告服务
//!
//! 管理员可以看到全部公告；教师和学生只能看到当前有效、
//! 且受众为 `all` 或自身角色的公告。作者本人或管理员可以修改、删除。

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::context::{self, finish, forbidden};
use crate::models::{
    ErrorCode,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>, HttpResponse> {
        context::resolve_storage(self.storage.as_ref(), request)
    }

    pub async fn list_announcements(
        &self,
        query: AnnouncementListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(list::list_announcements(self, query, request).await)
    }

    pub async fn create_announcement(
        &self,
        data: CreateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(create::create_announcement(self, data, request).await)
    }

    pub async fn get_announcement(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(get::get_announcement(self, id, request).await)
    }

    pub async fn update_announcement(
        &self,
        id: i64,
        data: UpdateAnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(update::update_announcement(self, id, data, request).await)
    }

    pub async fn delete_announcement(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        finish(delete::delete_announcement(self, id, request).await)
    }
}

/// 只有作者本人或管理员可以修改
pub(crate) fn ensure_can_modify(user: &User, announcement: &Announcement) -> Result<(), HttpResponse> {
    if user.role == UserRole::Admin || announcement.author_id == user.id {
        Ok(())
    } else {
        Err(forbidden(
            ErrorCode::Forbidden,
            "Only the author or an administrator may modify this announcement",
        ))
    }
}
