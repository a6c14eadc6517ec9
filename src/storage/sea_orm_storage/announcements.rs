//! 公告存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    announcements::{
        entities::{Announcement, AnnouncementPriority, Audience},
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        author_id: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            audience: Set(req.audience.unwrap_or(Audience::All).to_string()),
            priority: Set(req
                .priority
                .unwrap_or(AnnouncementPriority::Normal)
                .to_string()),
            author_id: Set(author_id),
            published_at: Set(req.published_at.unwrap_or(now).timestamp()),
            expires_at: Set(req.expires_at.map(|t| t.timestamp())),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建公告失败", e))?;

        Ok(result.into_announcement())
    }

    pub async fn get_announcement_by_id_impl(&self, id: i64) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 分页列出公告，按发布时间排序
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        let mut select = Announcements::find();

        if let Some(audiences) = &query.audiences {
            select = select.filter(Column::Audience.is_in(audiences.iter().map(|a| a.as_str())));
        }

        if let Some(priority) = query.priority {
            select = select.filter(Column::Priority.eq(priority.as_str()));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Title, term))
                    .add(like_contains(Column::Content, term)),
            );
        }

        // 生效中：已发布且未过期
        if let Some(at) = query.active_at {
            let ts = at.timestamp();
            select = select.filter(Column::PublishedAt.lte(ts)).filter(
                Condition::any()
                    .add(Column::ExpiresAt.is_null())
                    .add(Column::ExpiresAt.gt(ts)),
            );
        }

        select = select
            .order_by(Column::PublishedAt, sort_order(query.sort_order))
            .order_by_desc(Column::Id);

        let (items, total) = fetch_page(&self.db, select, query.pagination, "公告").await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(|m| m.into_announcement()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn update_announcement_impl(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        if self.get_announcement_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(audience) = update.audience {
            model.audience = Set(audience.to_string());
        }
        if let Some(priority) = update.priority {
            model.priority = Set(priority.to_string());
        }
        if let Some(published_at) = update.published_at {
            model.published_at = Set(published_at.timestamp());
        }
        if let Some(expires_at) = update.expires_at {
            model.expires_at = Set(Some(expires_at.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新公告失败", e))?;

        self.get_announcement_by_id_impl(id).await
    }

    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除公告失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
