//! 学生档案存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::format_date;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, StudentSortBy, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now();
        let enrolled_on = req.enrolled_on.unwrap_or_else(|| now.date_naive());

        let model = ActiveModel {
            user_id: Set(req.user_id),
            student_code: Set(req.student_code),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            class_id: Set(req.class_id),
            date_of_birth: Set(req.date_of_birth.map(format_date)),
            gender: Set(req.gender),
            guardian_name: Set(req.guardian_name),
            guardian_phone: Set(req.guardian_phone),
            status: Set(req.status.unwrap_or(StudentStatus::Active).to_string()),
            enrolled_on: Set(format_date(enrolled_on)),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建学生失败", e))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let mut select = Students::find();

        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::FirstName, term))
                    .add(like_contains(Column::LastName, term))
                    .add(like_contains(Column::StudentCode, term))
                    .add(like_contains(Column::Email, term)),
            );
        }

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let order = sort_order(query.sort_order);
        select = match query.sort_by {
            StudentSortBy::Name => select
                .order_by(Column::LastName, order.clone())
                .order_by(Column::FirstName, order),
            StudentSortBy::StudentCode => select.order_by(Column::StudentCode, order),
            StudentSortBy::EnrolledOn => select.order_by(Column::EnrolledOn, order),
            StudentSortBy::CreatedAt => select.order_by(Column::CreatedAt, order),
        }
        .order_by_asc(Column::Id);

        let (students, total) = fetch_page(&self.db, select, query.pagination, "学生").await?;

        Ok(PaginatedResponse::new(
            students.into_iter().map(|m| m.into_student()).collect(),
            query.pagination,
            total,
        ))
    }

    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::StudentCode)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolHubError::database_operation(format!("查询班级学生失败: {e}"))
            })?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn count_students_in_class_impl(&self, class_id: i64) -> Result<u64> {
        Students::find()
            .filter(Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计班级人数失败: {e}")))
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
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
        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }
        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(Some(format_date(date_of_birth)));
        }
        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender));
        }
        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }
        if let Some(guardian_phone) = update.guardian_phone {
            model.guardian_phone = Set(Some(guardian_phone));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
