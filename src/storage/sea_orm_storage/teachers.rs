//! 教师档案存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::format_date;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    teachers::{
        entities::{Teacher, TeacherStatus},
        requests::{CreateTeacherRequest, TeacherListQuery, TeacherSortBy, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            employee_code: Set(req.employee_code),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            status: Set(req.status.unwrap_or(TeacherStatus::Active).to_string()),
            hired_on: Set(req.hired_on.map(format_date)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建教师失败", e))?;

        Ok(result.into_teacher())
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let mut select = Teachers::find();

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::FirstName, term))
                    .add(like_contains(Column::LastName, term))
                    .add(like_contains(Column::EmployeeCode, term))
                    .add(like_contains(Column::Email, term)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            TeacherSortBy::Name => select
                .order_by(Column::LastName, order.clone())
                .order_by(Column::FirstName, order),
            TeacherSortBy::EmployeeCode => select.order_by(Column::EmployeeCode, order),
            TeacherSortBy::HiredOn => select.order_by(Column::HiredOn, order),
            TeacherSortBy::CreatedAt => select.order_by(Column::CreatedAt, order),
        }
        .order_by_asc(Column::Id);

        let (teachers, total) = fetch_page(&self.db, select, query.pagination, "教师").await?;

        Ok(PaginatedResponse::new(
            teachers.into_iter().map(|m| m.into_teacher()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(Some(user_id));
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(hired_on) = update.hired_on {
            model.hired_on = Set(Some(format_date(hired_on)));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新教师失败", e))?;

        self.get_teacher_by_id_impl(id).await
    }

    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除教师失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
