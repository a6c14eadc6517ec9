//! 仪表盘统计

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::errors::{Result, SchoolHubError};
use crate::models::dashboard::responses::EntityCounts;
use sea_orm::{EntityTrait, PaginatorTrait};

impl SeaOrmStorage {
    async fn count_rows<E>(&self, name: &str) -> Result<i64>
    where
        E: EntityTrait,
        E::Model: Send + Sync + 'static,
    {
        let count = E::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计{name}数量失败: {e}")))?;

        Ok(count as i64)
    }

    pub async fn count_entities_impl(&self) -> Result<EntityCounts> {
        Ok(EntityCounts {
            users: self.count_rows::<Users>("用户").await?,
            students: self.count_rows::<Students>("学生").await?,
            teachers: self.count_rows::<Teachers>("教师").await?,
            classes: self.count_rows::<Classes>("班级").await?,
            subjects: self.count_rows::<Subjects>("科目").await?,
            announcements: self.count_rows::<Announcements>("公告").await?,
            events: self.count_rows::<Events>("活动").await?,
        })
    }
}
