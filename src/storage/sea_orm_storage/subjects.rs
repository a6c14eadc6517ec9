//! 科目存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, SubjectSortBy, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            description: Set(req.description),
            credits: Set(req.credits.unwrap_or(1)),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let mut select = Subjects::find();

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Code, term))
                    .add(like_contains(Column::Name, term)),
            );
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            SubjectSortBy::Name => select.order_by(Column::Name, order),
            SubjectSortBy::Code => select.order_by(Column::Code, order),
            SubjectSortBy::Credits => select.order_by(Column::Credits, order),
            SubjectSortBy::CreatedAt => select.order_by(Column::CreatedAt, order),
        }
        .order_by_asc(Column::Id);

        let (subjects, total) = fetch_page(&self.db, select, query.pagination, "科目").await?;

        Ok(PaginatedResponse::new(
            subjects.into_iter().map(|m| m.into_subject()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn list_subjects_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Subject>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let subjects = Subjects::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 教师任教的全部科目
    pub async fn list_subjects_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新科目失败", e))?;

        self.get_subject_by_id_impl(id).await
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除科目失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
