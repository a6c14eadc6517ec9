use super::entities::EventStatus;
use crate::models::announcements::entities::Audience;
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use ts_rs::TS;

// 活动列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub enum EventSortBy {
    #[default]
    StartAt,
    EndAt,
    Title,
    CreatedAt,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    // 日期区间（含两端），与活动时间段有交集即命中
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<EventStatus>,
    pub audience: Option<Audience>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: EventSortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub audience: Option<Audience>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub audience: Option<Audience>,
}

// 活动列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct EventListQuery {
    pub pagination: PaginationQuery,
    pub range_start: Option<DateTime<Utc>>,
    pub range_end: Option<DateTime<Utc>>,
    pub status: Option<EventStatus>,
    pub audiences: Option<Vec<Audience>>,
    pub search: Option<String>,
    pub sort_by: EventSortBy,
    pub sort_order: SortOrder,
    // 计算状态时使用的当前时间
    pub now: DateTime<Utc>,
}

impl Default for EventListQuery {
    fn default() -> Self {
        Self {
            pagination: PaginationQuery::default(),
            range_start: None,
            range_end: None,
            status: None,
            audiences: None,
            search: None,
            sort_by: EventSortBy::default(),
            sort_order: SortOrder::Asc,
            now: Utc::now(),
        }
    }
}
