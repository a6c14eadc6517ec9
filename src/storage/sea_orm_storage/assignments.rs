//! 作业存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::{
            AssignmentListQuery, AssignmentSortBy, CreateAssignmentRequest,
            UpdateAssignmentRequest,
        },
        responses::AssignmentListResponse,
    },
};
use crate::models::grades::entities::DEFAULT_MAX_SCORE;
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(teacher_id),
            due_at: Set(req.due_at.timestamp()),
            max_score: Set(req.max_score.unwrap_or(DEFAULT_MAX_SCORE)),
            status: Set(req.status.unwrap_or(AssignmentStatus::Draft).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建作业失败", e))?;

        Ok(result.into_assignment())
    }

    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let mut select = Assignments::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(due_before) = query.due_before {
            select = select.filter(Column::DueAt.lte(due_before.timestamp()));
        }
        if let Some(due_after) = query.due_after {
            select = select.filter(Column::DueAt.gte(due_after.timestamp()));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Title, term))
                    .add(like_contains(Column::Description, term)),
            );
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            AssignmentSortBy::DueAt => select.order_by(Column::DueAt, order),
            AssignmentSortBy::Title => select.order_by(Column::Title, order),
            AssignmentSortBy::CreatedAt => select.order_by(Column::CreatedAt, order),
        }
        .order_by_asc(Column::Id);

        let (items, total) = fetch_page(&self.db, select, query.pagination, "作业").await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(|m| m.into_assignment()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        if self.get_assignment_by_id_impl(id).await?.is_none() {
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
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(due_at) = update.due_at {
            model.due_at = Set(due_at.timestamp());
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新作业失败", e))?;

        self.get_assignment_by_id_impl(id).await
    }

    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除作业失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
