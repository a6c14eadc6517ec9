//! 活动实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: i64,
    pub end_at: i64,
    pub audience: String,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 转换为业务模型，状态按 `now` 计算
    pub fn into_event(
        self,
        now: chrono::DateTime<chrono::Utc>,
    ) -> crate::models::events::entities::Event {
        use crate::models::announcements::entities::Audience;
        use crate::models::events::entities::{Event, EventStatus};

        let start_at = super::to_datetime(self.start_at);
        let end_at = super::to_datetime(self.end_at);

        Event {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            start_at,
            end_at,
            audience: self.audience.parse::<Audience>().unwrap_or(Audience::All),
            created_by: self.created_by,
            status: EventStatus::classify(now, start_at, end_at),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
