//! 公告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub audience: String,
    pub priority: String,
    pub author_id: i64,
    pub published_at: i64,
    pub expires_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_announcement(self) -> crate::models::announcements::entities::Announcement {
        use crate::models::announcements::entities::{
            Announcement, AnnouncementPriority, Audience,
        };

        Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            audience: self.audience.parse::<Audience>().unwrap_or(Audience::All),
            priority: self
                .priority
                .parse::<AnnouncementPriority>()
                .unwrap_or(AnnouncementPriority::Normal),
            author_id: self.author_id,
            published_at: super::to_datetime(self.published_at),
            expires_at: self.expires_at.map(super::to_datetime),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
