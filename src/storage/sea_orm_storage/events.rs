//! 活动存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    announcements::entities::Audience,
    events::{
        entities::{Event, EventStatus},
        requests::{CreateEventRequest, EventListQuery, EventSortBy, UpdateEventRequest},
        responses::EventListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_event_impl(&self, created_by: i64, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            location: Set(req.location),
            start_at: Set(req.start_at.timestamp()),
            end_at: Set(req.end_at.timestamp()),
            audience: Set(req.audience.unwrap_or(Audience::All).to_string()),
            created_by: Set(created_by),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建活动失败", e))?;

        Ok(result.into_event(now))
    }

    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询活动失败: {e}")))?;

        let now = chrono::Utc::now();
        Ok(result.map(|m| m.into_event(now)))
    }

    /// 分页列出活动
    ///
    /// 日期区间按重叠判断：活动开始不晚于区间结束，且结束不早于区间开始。
    /// 状态筛选换算为相对 `query.now` 的时间条件。
    pub async fn list_events_with_pagination_impl(
        &self,
        query: EventListQuery,
    ) -> Result<EventListResponse> {
        let mut select = Events::find();
        let now = query.now.timestamp();

        if let Some(range_end) = query.range_end {
            select = select.filter(Column::StartAt.lte(range_end.timestamp()));
        }
        if let Some(range_start) = query.range_start {
            select = select.filter(Column::EndAt.gte(range_start.timestamp()));
        }

        if let Some(status) = query.status {
            select = match status {
                EventStatus::Upcoming => select.filter(Column::StartAt.gt(now)),
                EventStatus::Ongoing => select
                    .filter(Column::StartAt.lte(now))
                    .filter(Column::EndAt.gte(now)),
                EventStatus::Completed => select.filter(Column::EndAt.lt(now)),
            };
        }

        if let Some(audiences) = &query.audiences {
            select = select.filter(Column::Audience.is_in(audiences.iter().map(|a| a.as_str())));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Title, term))
                    .add(like_contains(Column::Description, term))
                    .add(like_contains(Column::Location, term)),
            );
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            EventSortBy::StartAt => select.order_by(Column::StartAt, order),
            EventSortBy::EndAt => select.order_by(Column::EndAt, order),
            EventSortBy::Title => select.order_by(Column::Title, order),
            EventSortBy::CreatedAt => select.order_by(Column::CreatedAt, order),
        }
        .order_by_asc(Column::Id);

        let (items, total) = fetch_page(&self.db, select, query.pagination, "活动").await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(|m| m.into_event(query.now)).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        if self.get_event_by_id_impl(id).await?.is_none() {
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
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }
        if let Some(start_at) = update.start_at {
            model.start_at = Set(start_at.timestamp());
        }
        if let Some(end_at) = update.end_at {
            model.end_at = Set(end_at.timestamp());
        }
        if let Some(audience) = update.audience {
            model.audience = Set(audience.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新活动失败", e))?;

        self.get_event_by_id_impl(id).await
    }

    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = Events::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除活动失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
