use super::entities::{AnnouncementPriority, Audience};
use crate::models::common::{PaginationQuery, SortOrder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub audience: Option<Audience>,
    pub priority: Option<AnnouncementPriority>,
    pub search: Option<String>,
    // 仅管理员有效，其它角色始终只看生效中的公告
    #[serde(default)]
    pub active_only: bool,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    pub audience: Option<Audience>,
    pub priority: Option<AnnouncementPriority>,
    // 缺省为立即发布
    pub published_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub audience: Option<Audience>,
    pub priority: Option<AnnouncementPriority>,
    pub published_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

// 公告列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AnnouncementListQuery {
    pub pagination: PaginationQuery,
    // 可见受众集合，None 表示不限
    pub audiences: Option<Vec<Audience>>,
    pub priority: Option<AnnouncementPriority>,
    pub search: Option<String>,
    // 若设置，只返回在该时刻生效的公告
    pub active_at: Option<DateTime<Utc>>,
    pub sort_order: SortOrder,
}
