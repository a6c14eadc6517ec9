//! 班级存储操作

use super::{SeaOrmStorage, db_error, fetch_page, sort_order};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SchoolHubError};
use crate::models::{
    PaginatedResponse,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::sql::{like_contains, search_term};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

/// 未指定容量时的默认值
pub const DEFAULT_CLASS_CAPACITY: i32 = 40;

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            grade_level: Set(req.grade_level),
            section: Set(req.section),
            teacher_id: Set(req.teacher_id),
            room: Set(req.room),
            academic_year: Set(req.academic_year),
            capacity: Set(req.capacity.unwrap_or(DEFAULT_CLASS_CAPACITY)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建班级失败", e))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let mut select = Classes::find();

        // 班主任筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 年级筛选
        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

        // 搜索条件
        if let Some(term) = search_term(&query.search) {
            select = select.filter(
                Condition::any()
                    .add(like_contains(Column::Name, term))
                    .add(like_contains(Column::Room, term))
                    .add(like_contains(Column::AcademicYear, term)),
            );
        }

        select = select
            .order_by(Column::CreatedAt, sort_order(query.sort_order))
            .order_by_asc(Column::Id);

        let (classes, total) = fetch_page(&self.db, select, query.pagination, "班级").await?;

        Ok(PaginatedResponse::new(
            classes.into_iter().map(|m| m.into_class()).collect(),
            query.pagination,
            total,
        ))
    }

    /// 教师担任班主任的全部班级
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::GradeLevel)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }
        if let Some(section) = update.section {
            model.section = Set(Some(section));
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(room) = update.room {
            model.room = Set(Some(room));
        }
        if let Some(academic_year) = update.academic_year {
            model.academic_year = Set(academic_year);
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新班级失败", e))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除班级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
